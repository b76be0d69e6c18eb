pub const OWNER_NAME: &str = "Harly Ohara";
pub const OWNER_ROLE: &str = "Game Security Researcher & Reverse Engineer";
pub const PORTRAIT_URL: &str = "/assets/portrait.webp";

pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", section: "home" },
    NavItem { label: "About", section: "about" },
    NavItem { label: "Projects", section: "projects" },
    NavItem { label: "Blog", section: "blog" },
    NavItem { label: "Contact", section: "contact" },
];

pub struct Stat {
    pub value: u32,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { value: 50, label: "Projects Completed" },
    Stat { value: 2, label: "Years Experience" },
    Stat { value: 100, label: "Happy Clients" },
];

#[derive(Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub demo_url: &'static str,
    pub source_url: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Advanced Memory Analysis Tool",
        description: "A sophisticated memory scanning and manipulation toolkit for real-time game analysis, featuring advanced pattern recognition and memory patching capabilities.",
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=400&h=250&fit=crop&auto=format&q=80",
        demo_url: "#",
        source_url: "#",
    },
    Project {
        id: 2,
        title: "Network Packet Interceptor",
        description: "Custom network analysis tool for intercepting and analyzing game traffic, with real-time packet manipulation and protocol reverse engineering.",
        image: "https://images.unsplash.com/photo-1629654297299-c8506221ca97?w=400&h=250&fit=crop&auto=format&q=80",
        demo_url: "#",
        source_url: "#",
    },
    Project {
        id: 3,
        title: "Anti-Cheat Research Framework",
        description: "Framework for studying how anti-cheat systems detect tampering, with kernel-level instrumentation and tooling for documenting their behaviour.",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=400&h=250&fit=crop&auto=format&q=80",
        demo_url: "#",
        source_url: "#",
    },
];

#[derive(Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub tags: &'static [&'static str],
}

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        id: 1,
        title: "Reverse Engineering Modern Anti-Cheat Systems",
        date: "2024-01-15",
        excerpt: "Deep dive into analyzing and understanding contemporary anti-cheat architectures and how they detect tampering.",
        tags: &["Reverse Engineering", "Anti-Cheat", "Game Security"],
    },
    BlogPost {
        id: 2,
        title: "Memory Analysis Techniques for Game Security",
        date: "2024-01-10",
        excerpt: "Methods for inspecting game memory structures in real-time applications.",
        tags: &["Memory Analysis", "Game Security", "Debugging"],
    },
    BlogPost {
        id: 3,
        title: "Network Protocol Analysis in Online Games",
        date: "2024-01-05",
        excerpt: "A guide to capturing and analyzing network traffic in multiplayer games.",
        tags: &["Network Analysis", "Protocol", "Multiplayer"],
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "GitHub", url: "#" },
    SocialLink { name: "LinkedIn", url: "#" },
    SocialLink { name: "Twitter", url: "#" },
    SocialLink { name: "Email", url: "#" },
];

pub const CONTACT_DETAILS: [(&str, &str); 3] = [
    ("📧", "notrealharly@example.com"),
    ("📱", "+1 (555) 123-4567"),
    ("📍", "San Francisco, CA"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_tracker::SECTION_IDS;

    #[test]
    fn nav_covers_every_section_in_order() {
        let sections: Vec<_> = NAV_ITEMS.iter().map(|item| item.section).collect();
        assert_eq!(sections, SECTION_IDS);
    }
}
