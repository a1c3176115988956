//! Static option catalog offered by the wizard

/// An industry and the sub-industries offered once it is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub name: &'static str,
    pub sub_industries: &'static [&'static str],
}

/// Primary focus of the start-up idea
pub const FOCUS_OPTIONS: &[&str] = &[
    "I am trying to solve a problem",
    "I am trying to address a market gap",
    "I am providing a better solution to the existing solution in the market",
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        name: "Agriculture",
        sub_industries: &[
            "Agri-Business Services",
            "Agrochemicals",
            "Agricultural Equipment",
            "Agricultural Technology",
            "Animal Husbandry",
        ],
    },
    Industry {
        name: "Banking",
        sub_industries: &[
            "Agricultural Banking",
            "Alternative Investments",
            "Asset Management",
            "Bancassurance",
            "Brokerage Services",
        ],
    },
    Industry {
        name: "Healthcare",
        sub_industries: &[
            "Ambulatory Services",
            "Biomedical Engineering",
            "Biotechnology",
            "Clinical Research",
            "Dental Care",
        ],
    },
];

pub const TECHNOLOGY_DOMAINS: &[&str] = &[
    "Artificial Intelligence (AI)",
    "Machine Learning (ML)",
    "Cloud Computing",
    "Big Data Analytics",
    "Internet of Things (IoT)",
    "Blockchain Technology",
    "Robotic Process Automation (RPA)",
    "Natural Language Processing (NLP)",
    "Augmented Reality (AR)",
    "Virtual Reality (VR)",
    "5G Technology",
    "Edge Computing",
    "Voice Recognition Technology",
    "Data Security Technologies",
    "Predictive Analytics",
    "Computer Vision",
];

pub const BUSINESS_MODELS: &[&str] = &[
    "Software-as-a-Service (SaaS)",
    "Business-to-Business (B2B)",
    "Business-to-Consumer (B2C)",
    "Direct-to-Consumer (D2C)",
    "Subscription-Based Service",
    "Freemium",
    "Marketplace",
    "Pay-Per-Use",
    "Platform-as-a-Service (PaaS)",
    "Consultant or Freelancer Services",
    "Franchise",
    "Licensing",
    "Managed Services",
    "Affiliate Marketing",
    "Referral-Based",
    "Crowdsourcing",
    "Advertising-Based",
];

pub const TARGET_AUDIENCES: &[&str] = &["General Public", "Elderly People", "Farmers"];

pub const MARKET_SEGMENTS: &[&str] = &[
    "Local",
    "Regional",
    "National",
    "Global",
    "Saturated",
    "Emerging",
    "Niche",
    "Developed",
    "Developing",
    "Fragmented",
    "Consolidated",
    "Mature",
    "Underdeveloped",
    "Regulated",
    "Unregulated",
    "Innovative",
    "Dynamic",
];

/// Industry names in catalog order
pub fn industry_names() -> Vec<&'static str> {
    INDUSTRIES.iter().map(|i| i.name).collect()
}

/// Look up an industry by exact name
pub fn find_industry(name: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.name == name)
}

/// Sub-industries of the named industry, empty when the industry is unknown
pub fn sub_industries(industry: &str) -> &'static [&'static str] {
    find_industry(industry).map_or(&[], |i| i.sub_industries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_industries_for_known_industry() {
        let subs = sub_industries("Healthcare");
        assert_eq!(subs.len(), 5);
        assert!(subs.contains(&"Dental Care"));
    }

    #[test]
    fn test_sub_industries_for_unknown_industry_is_empty() {
        assert!(sub_industries("Aerospace").is_empty());
        assert!(sub_industries("").is_empty());
    }

    #[test]
    fn test_industry_names_in_order() {
        assert_eq!(industry_names(), vec!["Agriculture", "Banking", "Healthcare"]);
    }

    #[test]
    fn test_catalog_lists_are_non_empty_and_unique() {
        for list in [
            FOCUS_OPTIONS,
            TECHNOLOGY_DOMAINS,
            BUSINESS_MODELS,
            TARGET_AUDIENCES,
            MARKET_SEGMENTS,
        ] {
            assert!(!list.is_empty());
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }
}
