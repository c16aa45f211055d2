//! Fixed product catalog.
//!
//! The marketing site sells exactly three products. The catalog is static
//! data compiled into the binary; there is no storage behind it. The
//! listing endpoint shows a shortened feature list (`highlights`), the
//! detail endpoint the full feature list plus benefits.

use serde::Serialize;

/// A benefit bullet shown on a product detail page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

/// One catalog entry, carrying both the listing and the detail view data.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Shortened feature list for the product listing.
    pub highlights: &'static [&'static str],
    /// Full feature list for the detail page.
    pub features: &'static [&'static str],
    pub benefits: &'static [Benefit],
}

/// Listing view: `{id, title, description, features}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Detail view: the listing fields plus the full feature list and benefits.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub benefits: &'static [Benefit],
}

impl Product {
    const fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title,
            description: self.description,
            features: self.highlights,
        }
    }

    const fn detail(&self) -> ProductDetail {
        ProductDetail {
            id: self.id,
            title: self.title,
            description: self.description,
            features: self.features,
            benefits: self.benefits,
        }
    }
}

/// The complete catalog, in listing order.
pub const CATALOG: &[Product] = &[
    Product {
        id: "hrms",
        title: "HRMS System",
        description: "Comprehensive human resource management system for modern organizations.",
        highlights: &[
            "Employee profiles & records",
            "Leave & attendance management",
            "Performance reviews",
            "Onboarding & offboarding workflows",
            "Document management",
        ],
        features: &[
            "Employee profiles & records",
            "Leave & attendance management",
            "Performance reviews",
            "Onboarding & offboarding workflows",
            "Document management",
            "Organization charts",
            "Employee self-service portal",
        ],
        benefits: &[
            Benefit {
                title: "Centralized Employee Data",
                description:
                    "Keep all employee information in one secure, easily accessible location.",
            },
            Benefit {
                title: "Automated HR Processes",
                description: "Reduce paperwork and manual tasks with automated workflows.",
            },
            Benefit {
                title: "Enhanced Compliance",
                description:
                    "Stay up-to-date with labor laws and regulations with built-in compliance tools.",
            },
        ],
    },
    Product {
        id: "payroll",
        title: "Payroll Management",
        description: "Streamline your payroll process with our automated system.",
        highlights: &[
            "Automated tax calculations",
            "Salary processing & direct deposits",
            "Compliance & reporting",
            "Payroll analytics",
            "Benefits administration",
        ],
        features: &[
            "Automated tax calculations",
            "Salary processing & direct deposits",
            "Compliance & reporting",
            "Payroll analytics",
            "Benefits administration",
            "Expense management",
            "Multi-country payroll support",
        ],
        benefits: &[
            Benefit {
                title: "Error-Free Calculations",
                description:
                    "Eliminate manual calculation errors with automated payroll processing.",
            },
            Benefit {
                title: "Tax Compliance",
                description:
                    "Stay compliant with automatic tax calculations and filing assistance.",
            },
            Benefit {
                title: "Time Savings",
                description:
                    "Reduce payroll processing time from days to hours with automation.",
            },
        ],
    },
    Product {
        id: "tracking",
        title: "Employee Tracking",
        description: "Monitor productivity and engagement across your organization.",
        highlights: &[
            "Time tracking & activity monitoring",
            "Productivity analytics",
            "Project progress tracking",
            "Remote work monitoring",
            "Goal setting and tracking",
        ],
        features: &[
            "Time tracking & activity monitoring",
            "Productivity analytics",
            "Project progress tracking",
            "Remote work monitoring",
            "Goal setting and tracking",
            "Performance metrics",
            "Team collaboration insights",
        ],
        benefits: &[
            Benefit {
                title: "Increased Productivity",
                description:
                    "Identify bottlenecks and optimize workflows for better productivity.",
            },
            Benefit {
                title: "Data-Driven Management",
                description: "Make informed decisions based on accurate performance metrics.",
            },
            Benefit {
                title: "Remote Work Optimization",
                description:
                    "Successfully manage remote teams with visibility into work patterns.",
            },
        ],
    },
];

/// All products in listing form.
#[must_use]
pub fn summaries() -> Vec<ProductSummary> {
    CATALOG.iter().map(Product::summary).collect()
}

/// Look up one product's detail view by ID.
#[must_use]
pub fn find(id: &str) -> Option<ProductDetail> {
    CATALOG.iter().find(|p| p.id == id).map(Product::detail)
}
