use crate::services::staff::staff_catalogue;
use crate::services::types::StaffMember;

/// Filter chips over the roster. Each non-`All` chip is a substring match
/// against role and specialties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaffFilter {
    #[default]
    All,
    PropertyManagement,
    Sales,
    Investment,
}

impl StaffFilter {
    pub const ALL_FILTERS: [StaffFilter; 4] = [
        StaffFilter::All,
        StaffFilter::PropertyManagement,
        StaffFilter::Sales,
        StaffFilter::Investment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StaffFilter::All => "All Team",
            StaffFilter::PropertyManagement => "Property Management",
            StaffFilter::Sales => "Sales",
            StaffFilter::Investment => "Investment",
        }
    }

    fn keyword(self) -> Option<&'static str> {
        match self {
            StaffFilter::All => None,
            StaffFilter::PropertyManagement => Some("property"),
            StaffFilter::Sales => Some("sales"),
            StaffFilter::Investment => Some("investment"),
        }
    }
}

pub fn filter_staff(filter: StaffFilter) -> Vec<&'static StaffMember> {
    let Some(keyword) = filter.keyword() else {
        return staff_catalogue().iter().collect();
    };
    staff_catalogue()
        .iter()
        .filter(|member| member_matches(member, keyword))
        .collect()
}

fn member_matches(member: &StaffMember, keyword: &str) -> bool {
    member.role.to_lowercase().contains(keyword)
        || member
            .specialties
            .iter()
            .any(|specialty| specialty.to_lowercase().contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_returns_the_whole_roster() {
        assert_eq!(filter_staff(StaffFilter::All).len(), 3);
    }

    #[test]
    fn keyword_filters_match_role_or_specialties() {
        let property: Vec<&str> = filter_staff(StaffFilter::PropertyManagement)
            .iter()
            .map(|member| member.name.as_str())
            .collect();
        // Sarah by role, Michael and Jessica via property-flavoured specialties.
        assert!(property.contains(&"Sarah Thompson"));

        let sales = filter_staff(StaffFilter::Sales);
        assert!(sales.iter().any(|member| member.name == "Michael Chen"));

        let investment = filter_staff(StaffFilter::Investment);
        assert!(investment.iter().any(|member| member.name == "Jessica Patel"));
        assert!(investment.iter().any(|member| member.name == "Michael Chen"));
    }

    #[test]
    fn sales_filter_excludes_non_sales_roles() {
        let sales = filter_staff(StaffFilter::Sales);
        assert!(sales.iter().all(|member| member.name != "Sarah Thompson"));
    }
}
