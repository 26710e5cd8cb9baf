use crate::domain::SiteContent;
use crate::view::Node;

/// Contact details. Blank lines are left out.
pub fn render_contact_section(site: &SiteContent) -> Node {
    let details = [
        ("contact-address", &site.address),
        ("contact-phone", &site.phone),
        ("contact-email", &site.email),
        ("contact-hours", &site.hours),
    ];

    let mut children = vec![Node::heading(2, "Contact Us")];
    children.extend(
        details
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(class, value)| Node::text(class, value.as_str())),
    );

    Node::section("contact-section", children)
}
