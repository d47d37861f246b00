//! Company directory
//!
//! Static fixture data: company facts and a handful of employees. The only
//! behaviour is the placeholder pairing of employees to action points.

use serde::Serialize;
use std::fmt;

/// Headline facts about the company
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub employees: &'static str,
    pub departments: &'static str,
    pub active_projects: &'static str,
    pub years_in_business: &'static str,
}

/// A directory entry
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Employee {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub department: &'static str,
    pub email: &'static str,
    pub experience: &'static str,
    pub expertise: &'static [&'static str],
    pub available_for_mentorship: bool,
}

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "TechCorp Industries",
    tagline: "Innovation-driven technology solutions",
    employees: "250+",
    departments: "15",
    active_projects: "50+",
    years_in_business: "12",
};

pub const EMPLOYEES: &[Employee] = &[
    Employee {
        id: 1,
        name: "Sarah Chen",
        position: "Sales Manager",
        department: "Sales",
        email: "sarah.chen@company.com",
        experience: "8 years",
        expertise: &["Deal closing", "Enterprise sales", "Contract negotiation"],
        available_for_mentorship: true,
    },
    Employee {
        id: 2,
        name: "Michael Rodriguez",
        position: "Legal Counsel",
        department: "Legal",
        email: "michael.rodriguez@company.com",
        experience: "12 years",
        expertise: &["Contract law", "Compliance", "Risk assessment"],
        available_for_mentorship: true,
    },
    Employee {
        id: 3,
        name: "Lisa Thompson",
        position: "Product Manager",
        department: "Product",
        email: "lisa.thompson@company.com",
        experience: "6 years",
        expertise: &["Product roadmap", "Feature specifications", "Customer requirements"],
        available_for_mentorship: true,
    },
    Employee {
        id: 4,
        name: "David Park",
        position: "Finance Director",
        department: "Finance",
        email: "david.park@company.com",
        experience: "10 years",
        expertise: &["Pricing strategy", "Budget approval", "Financial planning"],
        available_for_mentorship: false,
    },
    Employee {
        id: 5,
        name: "Emma Watson",
        position: "Sales Representative",
        department: "Sales",
        email: "emma.watson@company.com",
        experience: "0 years",
        expertise: &["B2B sales", "Client relations"],
        available_for_mentorship: false,
    },
];

/// Recommended contact for the action at `index` (placeholder pairing)
pub fn recommend_for_action(index: usize) -> &'static Employee {
    &EMPLOYEES[index % EMPLOYEES.len()]
}

/// Directory tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryTab {
    #[default]
    Employees,
    Protocols,
    Projects,
    Resources,
}

impl DirectoryTab {
    pub const ALL: [DirectoryTab; 4] = [
        DirectoryTab::Employees,
        DirectoryTab::Protocols,
        DirectoryTab::Projects,
        DirectoryTab::Resources,
    ];

    /// Parse a tab name (case-insensitive)
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "employees" => Ok(Self::Employees),
            "protocols" => Ok(Self::Protocols),
            "projects" => Ok(Self::Projects),
            "resources" => Ok(Self::Resources),
            other => Err(format!(
                "Unknown tab: {}. Must be one of: employees, protocols, projects, resources",
                other
            )),
        }
    }

    /// Placeholder text for tabs without content yet
    pub fn coming_soon(&self) -> Option<&'static str> {
        match self {
            Self::Employees => None,
            Self::Protocols => Some("Company protocols and procedures will be available here."),
            Self::Projects => Some("Active projects and initiatives will be displayed here."),
            Self::Resources => Some("Company resources and tools will be available here."),
        }
    }
}

impl fmt::Display for DirectoryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employees => write!(f, "Employees"),
            Self::Protocols => write!(f, "Protocols"),
            Self::Projects => write!(f, "Projects"),
            Self::Resources => write!(f, "Resources"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_wraps_around() {
        assert_eq!(recommend_for_action(0).name, "Sarah Chen");
        assert_eq!(recommend_for_action(4).name, "Emma Watson");
        assert_eq!(recommend_for_action(5).name, "Sarah Chen");
        assert_eq!(recommend_for_action(7).id, 3);
    }

    #[test]
    fn test_employee_ids_are_unique() {
        let mut ids: Vec<u32> = EMPLOYEES.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), EMPLOYEES.len());
    }

    #[test]
    fn test_tab_parse() {
        for tab in DirectoryTab::ALL {
            assert_eq!(DirectoryTab::parse_str(&tab.to_string()).unwrap(), tab);
        }
        assert!(DirectoryTab::parse_str("payroll").is_err());
    }

    #[test]
    fn test_only_employees_tab_has_content() {
        assert!(DirectoryTab::Employees.coming_soon().is_none());
        assert!(DirectoryTab::ALL[1..].iter().all(|t| t.coming_soon().is_some()));
    }
}
