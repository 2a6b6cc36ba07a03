use anyhow::{anyhow, Result};

/// Separates the event name from the option list in `/event` arguments.
pub const PROPOSAL_DELIMITER: char = '|';
/// Separates individual date expressions in an option list.
pub const OPTION_DELIMITER: char = ',';

pub fn validate_event_name(name: &str) -> Result<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(anyhow!("Event name cannot be empty"));
    }

    Ok(())
}

/// Splits `"<name> | <dates>"` at the first delimiter into a trimmed name and
/// the raw option list.
pub fn split_proposal_args(args: &str) -> Result<(String, String)> {
    let (name, options) = args
        .split_once(PROPOSAL_DELIMITER)
        .ok_or_else(|| anyhow!("Missing '{}' between event name and dates", PROPOSAL_DELIMITER))?;

    let name = name.trim();
    validate_event_name(name)?;

    Ok((name.to_string(), options.trim().to_string()))
}

/// Splits a comma-separated option list, dropping pieces that are blank.
pub fn split_option_list(options: &str) -> Vec<String> {
    options
        .split(OPTION_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
