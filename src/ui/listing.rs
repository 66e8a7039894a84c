//! Plain-Text Listing
//!
//! Prints a sectioned index the way the list screen groups it.

use std::fmt::Write;

use crate::logins::SectionedLoginIndex;

const NO_USERNAME: &str = "(no username)";

pub fn render_listing(index: &SectionedLoginIndex) -> String {
    let mut out = String::new();

    for section in 0..index.section_count() {
        let title = index.section_title(section).unwrap_or_default();
        let _ = writeln!(out, "{}", title);

        for row in 0..index.row_count(section) {
            let Some(login) = index.record_at(section, row) else { continue };
            let domain = index.base_domain_at(section, row).unwrap_or_default();
            let username = login.username.as_deref().unwrap_or(NO_USERNAME);
            let _ = writeln!(out, "  {:<28} {}", domain, username);
        }
    }

    if index.section_count() == 0 {
        out.push_str("No logins\n");
    }

    let hidden = index.hidden_len();
    if hidden > 0 {
        let _ = writeln!(out, "{} login(s) hidden: unrecognized hostname", hidden);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LoginRecord;

    #[test]
    fn test_render_sections() {
        let index = SectionedLoginIndex::with_records(vec![
            LoginRecord::new("https://b.com", "pw").with_username("bob"),
            LoginRecord::new("https://a.com", "pw"),
            LoginRecord::new("not a url", "pw"),
        ]);

        let text = render_listing(&index);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "A");
        assert!(lines[1].starts_with("  a.com"));
        assert!(lines[1].ends_with(NO_USERNAME));
        assert_eq!(lines[2], "B");
        assert!(lines[3].ends_with("bob"));
        assert_eq!(lines[4], "1 login(s) hidden: unrecognized hostname");
    }

    #[test]
    fn test_render_empty() {
        let index = SectionedLoginIndex::new();
        assert_eq!(render_listing(&index), "No logins\n");
    }
}
