//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask the user to confirm an action
///
/// Returns `true` without prompting when `skip` is set (`--yes` or batch mode).
pub fn confirm_action(prompt: &str, skip: bool) -> Result<bool, dialoguer::Error> {
    if skip {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
}
