//! Grouping of portal access records by shared URL

use std::collections::HashMap;

use socportal_domain::{PortalAccessRecord, PortalGroup};
use tracing::warn;

/// Partition `records` into one [`PortalGroup`] per distinct `portal_url`.
///
/// Output groups appear in first-seen URL order; within a group, records are
/// sorted by `role` (case-sensitive lexicographic, stable for equal roles).
/// Duplicate record ids pass through untouched.
///
/// `portal_name`/`portal_category` are taken from the first record of each
/// group. Divergent values on later records are a data-entry problem in the
/// upstream tracker; they are logged and otherwise ignored.
pub fn group_by_url(records: Vec<PortalAccessRecord>) -> Vec<PortalGroup> {
    let mut groups: Vec<PortalGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        if let Some(&at) = index.get(&record.portal_url) {
            let group = &mut groups[at];
            if group.portal_name != record.portal_name
                || group.portal_category != record.portal_category
            {
                warn!(
                    url = %record.portal_url,
                    id = %record.id,
                    "portal name/category diverges within URL group; keeping first-seen values"
                );
            }
            group.records.push(record);
        } else {
            index.insert(record.portal_url.clone(), groups.len());
            groups.push(PortalGroup {
                portal_url: record.portal_url.clone(),
                portal_name: record.portal_name.clone(),
                portal_category: record.portal_category.clone(),
                records: vec![record],
            });
        }
    }

    for group in &mut groups {
        group.records.sort_by(|a, b| a.role.cmp(&b.role));
    }

    groups
}
