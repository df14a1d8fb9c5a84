//! Spreadsheet sheet names.

/// Longest sheet name spreadsheet applications accept.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const ILLEGAL_CHARS: [char; 7] = ['[', ']', ':', '\\', '/', '*', '?'];

const LEDGER_PREFIX: &str = "Ledger - ";

/// Makes a string usable as a sheet name.
///
/// Trailing characters spreadsheets reject are dropped, the remaining ones
/// are replaced with `_` and the result is cut to 31 characters. Underscores
/// already in the name are kept.
#[must_use]
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .trim_end_matches(ILLEGAL_CHARS)
        .chars()
        .map(|c| if ILLEGAL_CHARS.contains(&c) { '_' } else { c })
        .collect();
    truncate(&replaced, MAX_SHEET_NAME_LEN)
}

/// Sheet name of an account's ledger, `Ledger - {account}`.
///
/// Two accounts that only differ after the cut share a name; collisions are
/// left to the caller.
#[must_use]
pub fn ledger_sheet_name(account: &str) -> String {
    let name = format!("{LEDGER_PREFIX}{}", sanitize_sheet_name(account));
    truncate(&name, MAX_SHEET_NAME_LEN)
}

fn truncate(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}
