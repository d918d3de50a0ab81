//! About tab: static party profile.

/// Mission card: translation key and accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pillar {
    /// Translation key of the title.
    pub key: &'static str,
    /// Accent as `#RRGGBB`.
    pub color: &'static str,
}

/// Mission pillars in display order.
pub const PILLARS: [Pillar; 3] = [
    Pillar {
        key: "about.transparency",
        color: "#FF9933",
    },
    Pillar {
        key: "about.empowerment",
        color: "#138808",
    },
    Pillar {
        key: "about.growth",
        color: "#4A90E2",
    },
];

/// One entry of the journey timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    /// Year label.
    pub year: &'static str,
    /// Translation key of the title.
    pub title_key: &'static str,
    /// Translation key of the description.
    pub description_key: &'static str,
}

/// Journey timeline, oldest first.
pub const MILESTONES: [Milestone; 3] = [
    Milestone {
        year: "2023",
        title_key: "about.milestones.y2023.title",
        description_key: "about.milestones.y2023.description",
    },
    Milestone {
        year: "2024",
        title_key: "about.milestones.y2024.title",
        description_key: "about.milestones.y2024.description",
    },
    Milestone {
        year: "2025",
        title_key: "about.milestones.y2025.title",
        description_key: "about.milestones.y2025.description",
    },
];

/// Party website shown under "Connect with Us".
pub const WEBSITE: &str = "swadeshihindparty.in";

/// Scroll position of the About tab.
#[derive(Debug, Default)]
pub struct AboutScreen {
    /// Lines scrolled from the top.
    pub scroll: u16,
}

impl AboutScreen {
    /// Scroll down one line.
    pub const fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Scroll up one line.
    pub const fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
