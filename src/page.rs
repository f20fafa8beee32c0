// Page model - the virtual portfolio document
//
// The page is a flat list of blocks laid out vertically in "units"
// (one unit = one rendered terminal row). A layout pass assigns each
// block its top offset and height; section tops drive the active-link
// highlight and anchor scrolling. Content is built in - there is no
// file loading and no network.

/// Identifies a block by its position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

/// Identifies a single skill tag inside a skill-category block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId {
    pub block: BlockId,
    pub index: usize,
}

/// The page's top-level sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// Anchor fragment for this section (what a nav link points at)
    pub fn fragment(&self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Title shown in the section heading and nav menu
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

/// A navigation link in the navbar / mobile menu.
///
/// `target: None` is the bare "#" link (the brand), which anchor
/// scrolling skips entirely.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub target: Option<SectionId>,
}

/// Preview art for a project card, loaded lazily.
///
/// `deferred` is the inactive source; it becomes the active source only
/// when the card first intersects the viewport (or eagerly when the
/// visibility watcher is disabled).
#[derive(Debug, Clone)]
pub struct ArtImage {
    pub deferred: Vec<&'static str>,
    pub height: u32,
}

/// One content block of the page.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    pub section: SectionId,
    pub kind: BlockKind,
    /// Top offset in units, filled by the layout pass
    pub top: u32,
    /// Height in units, derived from the kind
    pub height: u32,
}

#[derive(Debug, Clone)]
pub enum BlockKind {
    /// Hero banner: name, tagline, and the role lines the typing
    /// effect operates on
    Hero {
        name: String,
        tagline: String,
        roles: Vec<String>,
    },
    /// Section heading ("About", "Projects", ...)
    Heading { title: String },
    /// Plain paragraph lines
    Paragraph { lines: Vec<String> },
    /// The about section's highlights box
    Highlights { items: Vec<String> },
    /// A category of toggleable skill tags. `index` is the position
    /// within the skills section, used for the stagger delay.
    SkillCategory {
        index: usize,
        name: String,
        tags: Vec<String>,
    },
    /// A project card. `index` drives the stagger delay.
    ProjectCard {
        index: usize,
        title: String,
        summary: Vec<String>,
        art: ArtImage,
    },
    /// One entry of the experience timeline
    TimelineItem {
        period: String,
        role: String,
        note: String,
    },
    /// A contact card; `href` may be a mailto: link (right-click copies)
    ContactCard { label: String, href: String },
    /// The contact form (name, email, message)
    ContactForm,
    /// Vertical breathing room between blocks
    Spacer { units: u32 },
}

impl BlockKind {
    /// Height of this block in units.
    ///
    /// The renderer produces exactly this many rows for the block, so
    /// layout and drawing can never drift apart.
    pub fn height(&self) -> u32 {
        match self {
            // name + tagline + blank + one row per role + padding
            BlockKind::Hero { roles, .. } => 3 + roles.len() as u32 + 2,
            // title + underline
            BlockKind::Heading { .. } => 2,
            BlockKind::Paragraph { lines } => lines.len() as u32,
            // border + items + border
            BlockKind::Highlights { items } => items.len() as u32 + 2,
            // category name + tag row
            BlockKind::SkillCategory { .. } => 2,
            // border + title + summary + art + border
            BlockKind::ProjectCard { summary, art, .. } => 3 + summary.len() as u32 + art.height,
            // period/role line + note line
            BlockKind::TimelineItem { .. } => 2,
            BlockKind::ContactCard { .. } => 1,
            // field + error row per field, then a gap and the submit
            // control; error rows render blank when there is no error
            BlockKind::ContactForm => 10,
            BlockKind::Spacer { units } => *units,
        }
    }
}

/// The static page: navbar links plus laid-out content blocks.
#[derive(Debug, Clone)]
pub struct Page {
    pub brand: String,
    pub nav_links: Vec<NavLink>,
    pub blocks: Vec<Block>,
}

impl Page {
    /// Build a page from raw block kinds, assigning ids and offsets.
    pub fn build(
        brand: impl Into<String>,
        nav_links: Vec<NavLink>,
        kinds: Vec<(SectionId, BlockKind)>,
    ) -> Self {
        let mut blocks = Vec::with_capacity(kinds.len());
        let mut top = 0u32;
        for (i, (section, kind)) in kinds.into_iter().enumerate() {
            let height = kind.height();
            blocks.push(Block {
                id: BlockId(i),
                section,
                kind,
                top,
                height,
            });
            top += height;
        }
        Self {
            brand: brand.into(),
            nav_links,
            blocks,
        }
    }

    /// Total document height in units
    pub fn height(&self) -> u32 {
        self.blocks
            .last()
            .map(|b| b.top + b.height)
            .unwrap_or(0)
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0)
    }

    /// Top offset of a section (top of its first block)
    pub fn section_top(&self, section: SectionId) -> Option<u32> {
        self.blocks
            .iter()
            .find(|b| b.section == section)
            .map(|b| b.top)
    }

    /// Sections present on the page, in document order
    pub fn sections(&self) -> Vec<SectionId> {
        let mut out: Vec<SectionId> = Vec::new();
        for block in &self.blocks {
            if out.last() != Some(&block.section) {
                out.push(block.section);
            }
        }
        out
    }

    /// The first mailto: contact link on the page, if any
    pub fn email_href(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match &b.kind {
            BlockKind::ContactCard { href, .. } if href.starts_with("mailto:") => {
                Some(href.as_str())
            }
            _ => None,
        })
    }

    /// Blocks that take part in the viewport-triggered reveal
    pub fn reveal_targets(&self) -> Vec<BlockId> {
        self.blocks
            .iter()
            .filter(|b| {
                matches!(
                    b.kind,
                    BlockKind::Heading { .. }
                        | BlockKind::Highlights { .. }
                        | BlockKind::SkillCategory { .. }
                        | BlockKind::ProjectCard { .. }
                        | BlockKind::TimelineItem { .. }
                        | BlockKind::ContactCard { .. }
                )
            })
            .map(|b| b.id)
            .collect()
    }

    /// Blocks carrying a deferred image source (project cards)
    pub fn image_targets(&self) -> Vec<BlockId> {
        self.blocks
            .iter()
            .filter(|b| matches!(b.kind, BlockKind::ProjectCard { .. }))
            .map(|b| b.id)
            .collect()
    }
}

/// Sample portfolio content shipped with the binary.
///
/// Section spacers keep the document tall enough that the scroll
/// thresholds (active-section offset, navbar anchor correction) behave
/// the way they do on a full-height page.
pub fn sample_page() -> Page {
    let nav_links = vec![
        NavLink {
            label: "Home".into(),
            target: Some(SectionId::Hero),
        },
        NavLink {
            label: "About".into(),
            target: Some(SectionId::About),
        },
        NavLink {
            label: "Skills".into(),
            target: Some(SectionId::Skills),
        },
        NavLink {
            label: "Projects".into(),
            target: Some(SectionId::Projects),
        },
        NavLink {
            label: "Experience".into(),
            target: Some(SectionId::Experience),
        },
        NavLink {
            label: "Contact".into(),
            target: Some(SectionId::Contact),
        },
    ];

    let card_art = |lines: Vec<&'static str>| ArtImage {
        height: lines.len() as u32,
        deferred: lines,
    };

    let mut kinds: Vec<(SectionId, BlockKind)> = Vec::new();

    // Hero
    kinds.push((
        SectionId::Hero,
        BlockKind::Hero {
            name: "Jordan Reyes".into(),
            tagline: "I build fast, honest software.".into(),
            roles: vec![
                "Systems Programmer".into(),
                "Terminal UI Enthusiast".into(),
                "Open Source Contributor".into(),
            ],
        },
    ));
    kinds.push((SectionId::Hero, BlockKind::Spacer { units: 40 }));

    // About
    kinds.push((
        SectionId::About,
        BlockKind::Heading {
            title: "About".into(),
        },
    ));
    kinds.push((
        SectionId::About,
        BlockKind::Paragraph {
            lines: vec![
                "Engineer with a soft spot for low-level details and".into(),
                "high-level ergonomics. I like tools that stay out of".into(),
                "your way and fail loudly when they can't.".into(),
            ],
        },
    ));
    kinds.push((
        SectionId::About,
        BlockKind::Highlights {
            items: vec![
                "10+ years shipping production software".into(),
                "Maintainer of three open source crates".into(),
                "Speaker at two systems conferences".into(),
            ],
        },
    ));
    kinds.push((SectionId::About, BlockKind::Spacer { units: 40 }));

    // Skills
    kinds.push((
        SectionId::Skills,
        BlockKind::Heading {
            title: "Skills".into(),
        },
    ));
    for (index, (name, tags)) in [
        ("Languages", vec!["Rust", "C", "Python", "Shell"]),
        ("Infrastructure", vec!["Linux", "Docker", "Nix", "CI"]),
        ("Interfaces", vec!["TUIs", "CLIs", "HTTP APIs"]),
    ]
    .into_iter()
    .enumerate()
    {
        kinds.push((
            SectionId::Skills,
            BlockKind::SkillCategory {
                index,
                name: name.into(),
                tags: tags.into_iter().map(String::from).collect(),
            },
        ));
    }
    kinds.push((SectionId::Skills, BlockKind::Spacer { units: 40 }));

    // Projects
    kinds.push((
        SectionId::Projects,
        BlockKind::Heading {
            title: "Projects".into(),
        },
    ));
    let projects: Vec<(&str, Vec<&str>, Vec<&'static str>)> = vec![
        (
            "ledgerline",
            vec![
                "Streaming double-entry ledger with an append-only",
                "core and snapshot compaction.",
            ],
            vec!["  ┌──┐ ┌──┐", "  │▓▓│→│▒▒│", "  └──┘ └──┘"],
        ),
        (
            "hexpeek",
            vec![
                "A hex viewer that understands structure: overlays",
                "parsed fields on top of raw bytes.",
            ],
            vec!["  0x00 7f45 4c46", "  0x04 0201 0100", "  ELF64 LSB     "],
        ),
        (
            "quietproxy",
            vec![
                "Localhost TLS-terminating proxy with per-route",
                "latency budgets and structured logs.",
            ],
            vec!["  :443 ──▶ :8080", "   12ms   budget", "   ok     ▂▃▅▂▁"],
        ),
    ];
    for (index, (title, summary, art)) in projects.into_iter().enumerate() {
        kinds.push((
            SectionId::Projects,
            BlockKind::ProjectCard {
                index,
                title: title.into(),
                summary: summary.into_iter().map(String::from).collect(),
                art: card_art(art),
            },
        ));
        kinds.push((SectionId::Projects, BlockKind::Spacer { units: 2 }));
    }
    kinds.push((SectionId::Projects, BlockKind::Spacer { units: 38 }));

    // Experience
    kinds.push((
        SectionId::Experience,
        BlockKind::Heading {
            title: "Experience".into(),
        },
    ));
    for (period, role, note) in [
        (
            "2021 — now",
            "Staff Engineer, Meridian Systems",
            "Own the data-plane runtime and its release train.",
        ),
        (
            "2017 — 2021",
            "Senior Engineer, Brightflow",
            "Built the ingestion pipeline from prototype to 1M events/s.",
        ),
        (
            "2013 — 2017",
            "Engineer, Calder Labs",
            "Firmware and tooling for industrial sensor fleets.",
        ),
    ] {
        kinds.push((
            SectionId::Experience,
            BlockKind::TimelineItem {
                period: period.into(),
                role: role.into(),
                note: note.into(),
            },
        ));
        kinds.push((SectionId::Experience, BlockKind::Spacer { units: 1 }));
    }
    kinds.push((SectionId::Experience, BlockKind::Spacer { units: 38 }));

    // Contact
    kinds.push((
        SectionId::Contact,
        BlockKind::Heading {
            title: "Contact".into(),
        },
    ));
    kinds.push((
        SectionId::Contact,
        BlockKind::ContactCard {
            label: "Email".into(),
            href: "mailto:jordan@example.dev".into(),
        },
    ));
    kinds.push((
        SectionId::Contact,
        BlockKind::ContactCard {
            label: "GitHub".into(),
            href: "https://github.com/jordanreyes".into(),
        },
    ));
    kinds.push((SectionId::Contact, BlockKind::Spacer { units: 1 }));
    kinds.push((SectionId::Contact, BlockKind::ContactForm));
    kinds.push((SectionId::Contact, BlockKind::Spacer { units: 20 }));

    Page::build("jordan.dev", nav_links, kinds)
}
