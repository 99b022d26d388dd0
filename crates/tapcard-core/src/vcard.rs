//! vCard 3.0 generation for the "Save Contact" flow.
//!
//! The exported block is a fixed nine-line template: every line is present
//! on every card, a missing website yields a bare `URL:` line, and values
//! are embedded as-is (commas and semicolons are not escaped). Wallet apps
//! in the wild accept this shape, so it must stay byte-stable.

use crate::profile::Profile;

/// Renders the profile's vCard 3.0 block.
///
/// Lines are separated by `\n` with no trailing newline.
pub fn vcard(profile: &Profile) -> String {
    format!(
        "BEGIN:VCARD\nVERSION:3.0\nFN:{}\nTITLE:{}\nORG:{}\nEMAIL:{}\nTEL:{}\nURL:{}\nNOTE:{}\nEND:VCARD",
        profile.full_name,
        profile.job_title,
        profile.company,
        profile.email,
        profile.phone,
        profile.website.as_deref().unwrap_or(""),
        profile.bio,
    )
}

/// Download filename for the vCard: the full name with every whitespace
/// run replaced by a single `_`, plus the `.vcf` extension.
pub fn vcard_filename(full_name: &str) -> String {
    let mut name = String::with_capacity(full_name.len() + 4);
    let mut in_run = false;
    for ch in full_name.chars() {
        if ch.is_whitespace() {
            if !in_run {
                name.push('_');
                in_run = true;
            }
        } else {
            name.push(ch);
            in_run = false;
        }
    }
    name.push_str(".vcf");
    name
}
