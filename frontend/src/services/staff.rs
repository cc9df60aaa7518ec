use std::sync::OnceLock;

use crate::services::types::{StaffId, StaffMember};

static CATALOGUE: OnceLock<Vec<StaffMember>> = OnceLock::new();

/// The agency's fixed team roster. Static reference data, loaded once.
pub fn staff_catalogue() -> &'static [StaffMember] {
    CATALOGUE.get_or_init(build_catalogue)
}

pub fn staff_by_id(id: StaffId) -> Option<&'static StaffMember> {
    staff_catalogue().iter().find(|member| member.id == id)
}

fn build_catalogue() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: StaffId(1),
            name: "Sarah Thompson".into(),
            role: "Senior Property Manager".into(),
            email: "sarah@aonerealestate.com.au".into(),
            phone: "0412 345 678".into(),
            experience: "10+ years in property management".into(),
            specialties: vec![
                "Residential Leasing".into(),
                "Property Maintenance".into(),
                "Tenant Relations".into(),
            ],
            location: "Adelaide CBD Office".into(),
            linkedin: "https://linkedin.com/in/sarah-thompson".into(),
            bio: "Sarah has extensive experience in Adelaide's property market and specializes \
                  in helping property owners maximize their investment returns while ensuring \
                  tenant satisfaction."
                .into(),
        },
        StaffMember {
            id: StaffId(2),
            name: "Michael Chen".into(),
            role: "Sales Director".into(),
            email: "michael@aonerealestate.com.au".into(),
            phone: "0423 456 789".into(),
            experience: "Adelaide property specialist since 2012".into(),
            specialties: vec![
                "Luxury Properties".into(),
                "Investment Properties".into(),
                "First Home Buyers".into(),
            ],
            location: "North Adelaide Office".into(),
            linkedin: "https://linkedin.com/in/michael-chen".into(),
            bio: "Michael has consistently ranked among Adelaide's top 1% of real estate \
                  agents, with particular expertise in the eastern and northern suburbs luxury \
                  market."
                .into(),
        },
        StaffMember {
            id: StaffId(3),
            name: "Jessica Patel".into(),
            role: "Property Investment Advisor".into(),
            email: "jessica@aonerealestate.com.au".into(),
            phone: "0434 567 890".into(),
            experience: "8 years in property investment".into(),
            specialties: vec![
                "Investment Strategy".into(),
                "Portfolio Management".into(),
                "Market Analysis".into(),
            ],
            location: "Adelaide CBD Office".into(),
            linkedin: "https://linkedin.com/in/jessica-patel".into(),
            bio: "Jessica helps investors build and optimize their property portfolios with a \
                  data-driven approach to market analysis and investment strategy."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_holds_three_members_with_unique_ids() {
        let catalogue = staff_catalogue();
        assert_eq!(catalogue.len(), 3);
        let mut ids: Vec<u32> = catalogue.iter().map(|member| member.id.0).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn lookup_by_id_round_trips() {
        let member = staff_by_id(StaffId(2)).expect("known id");
        assert_eq!(member.name, "Michael Chen");
        assert!(staff_by_id(StaffId(99)).is_none());
    }
}
