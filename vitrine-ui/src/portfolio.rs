//! Static project catalog the focus rail is mounted with.
//!
//! Fixed at build time; the rail never creates or destroys entries.

use vitrine_model::RailItem;

const COMMON_TAGS: [&str; 10] = [
    "React JS",
    "JavaScript",
    "CSS",
    "Bootstrap",
    "Routing",
    "REST API Calls",
    "Local Storage",
    "JWT Token",
    "Authorization",
    "Authentication",
];

const COMMON_TECH_ICONS: [&str; 10] = [
    "react",
    "javascript",
    "css3",
    "bootstrap",
    "react-router",
    "api",
    "database",
    "jwt",
    "shield",
    "user-lock",
];

/// The showcase items, in rail order.
pub fn portfolio_items() -> Vec<RailItem> {
    vec![
        RailItem::new(
            "synapstore",
            "SynapStore",
            "assets/projects/synapstore.png",
        )
        .with_description("An smart pharmacy system with AI features")
        .with_long_description(
            "SynapStore is a revolutionary AI-powered pharmacy management \
             system designed to streamline specific pharmaceutical \
             workflows. It features predictive inventory analysis.",
        )
        .with_meta("AI Pharmacy")
        .with_href("https://www.synapstore.me")
        .with_tags([
            "React 18",
            "TypeScript",
            "TailwindCSS",
            "Node.js",
            "Express",
            "PostgreSQL",
            "Prisma",
            "Redis",
            "Recoil",
        ])
        .with_tech_icons([
            "react",
            "vite",
            "typescript",
            "tailwindcss",
            "recoil",
            "nodejs",
            "express",
            "postgresql",
            "prisma",
            "redis",
        ]),
        RailItem::new("jobby", "Jobby", "assets/projects/jobby.png")
            .with_description("A full stack job searching platform")
            .with_long_description(
                "Jobby provides a comprehensive job search experience with \
                 advanced filtering, user authentication, and profile \
                 management capabilities.",
            )
            .with_meta("Job Portal")
            .with_href("https://joby.ccbp.tech")
            .with_tags(COMMON_TAGS)
            .with_tech_icons(COMMON_TECH_ICONS),
        RailItem::new("nxtwatch", "Nxtwatch", "assets/projects/nxtwatch.png")
            .with_description("An YouTube clone with CRUD operations")
            .with_long_description(
                "A fully functional video streaming platform mimicking \
                 YouTube's core features including video playback, search, \
                 and theme toggling.",
            )
            .with_meta("Streaming")
            .with_href("https://nxtwatch.ccbp.tech")
            .with_tags(COMMON_TAGS)
            .with_tech_icons(COMMON_TECH_ICONS),
        RailItem::new(
            "nxttrendz",
            "NxtTrendz",
            "assets/projects/nxttrendz.png",
        )
        .with_description("An ecommerce shopping platform")
        .with_long_description(
            "NxtTrendz is a modern e-commerce solution featuring product \
             listings, cart management, and a seamless checkout process.",
        )
        .with_meta("E-Commerce")
        .with_href("https://nxtz.ccbp.tech")
        .with_tags(COMMON_TAGS)
        .with_tech_icons(COMMON_TECH_ICONS),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::rail::{FocusRail, RailConfig};

    #[test]
    fn catalog_has_four_unique_entries() {
        let items = portfolio_items();
        assert_eq!(items.len(), 4);
        let ids: HashSet<_> = items.iter().map(|item| &item.id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn catalog_mounts_on_a_rail() {
        let rail =
            FocusRail::new(portfolio_items(), RailConfig::desktop_defaults())
                .unwrap();
        assert_eq!(rail.frame().active_item.title, "SynapStore");
    }
}
