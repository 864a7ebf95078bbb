// src/specs/addresses.rs
// City page: address blocks → AddressRecords.
//
// No dedup here. Addresses repeat across city pages (a store sits on the
// border of two directory cities, or a page lists nearby locations), so
// the pipeline dedups once over the whole accumulated run.

use crate::data::AddressRecord;

/// Shape one city page's cleaned address-block texts into records,
/// in page order.
pub fn from_block_texts(texts: &[String]) -> Vec<AddressRecord> {
    texts.iter().map(AddressRecord::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_page_order_and_repeats() {
        let texts = vec![
            "1 Main St, Dover, DE 19901".to_string(),
            "2 Oak Ave, Dover, DE 19901".to_string(),
            "1 Main St, Dover, DE 19901".to_string(),
        ];
        let got = from_block_texts(&texts);
        assert_eq!(got.len(), 3);
        assert_eq!(got[0], got[2]);
    }
}
