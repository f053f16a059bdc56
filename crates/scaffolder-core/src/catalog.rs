//! Static framework and variant catalog
//!
//! Every template identifier in the catalog corresponds to a `template-<id>`
//! directory in the template root.

use colored::{Color, Colorize};

/// A selectable language flavor of a framework; its name is the template identifier
#[derive(Debug, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub display: &'static str,
    pub color: Color,
}

impl Variant {
    /// Colored label shown in the variant list
    pub fn label(&self) -> String {
        self.display.color(self.color).to_string()
    }
}

/// A framework entry; frameworks without variants are templates themselves
#[derive(Debug, PartialEq, Eq)]
pub struct Framework {
    pub name: &'static str,
    pub display: Option<&'static str>,
    pub color: Color,
    pub variants: &'static [Variant],
}

impl Framework {
    /// Colored label shown in the framework list
    pub fn label(&self) -> String {
        self.display.unwrap_or(self.name).color(self.color).to_string()
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

pub const FRAMEWORKS: &[Framework] = &[
    Framework {
        name: "vue",
        display: None,
        color: Color::Yellow,
        variants: &[
            Variant {
                name: "vue3",
                display: "JavaScript",
                color: Color::Yellow,
            },
            Variant {
                name: "vue3-ts",
                display: "TypeScript",
                color: Color::Blue,
            },
            Variant {
                name: "vue2.7",
                display: "JavaScript",
                color: Color::Green,
            },
        ],
    },
    Framework {
        name: "library",
        display: None,
        color: Color::Yellow,
        variants: &[
            Variant {
                name: "library",
                display: "JavaScript",
                color: Color::Yellow,
            },
            Variant {
                name: "library-ts",
                display: "TypeScript",
                color: Color::Blue,
            },
        ],
    },
];

/// Flatten a catalog into its template identifiers, in catalog order
pub fn template_ids(catalog: &[Framework]) -> Vec<&'static str> {
    catalog
        .iter()
        .flat_map(|framework| {
            if framework.has_variants() {
                framework.variants.iter().map(|v| v.name).collect::<Vec<_>>()
            } else {
                vec![framework.name]
            }
        })
        .collect()
}

/// Check whether an identifier names a template in the catalog
pub fn is_template(catalog: &[Framework], id: &str) -> bool {
    template_ids(catalog).contains(&id)
}

/// Directory name holding the payload for a template identifier
pub fn template_dir_name(id: &str) -> String {
    format!("template-{}", id)
}
