// SPDX-License-Identifier: MPL-2.0
//! Provider filtering shared by the file, photo and video lists.

use super::item::{CatalogItem, ItemId};
use super::provider::ProviderSelection;

/// Returns the items whose provider passes `selection`, in their original
/// order. With [`ProviderSelection::All`] every item is returned.
///
/// Single pass, no sorting and no deduplication.
pub fn filter_by_provider<T: CatalogItem>(items: &[T], selection: ProviderSelection) -> Vec<&T> {
    items
        .iter()
        .filter(|item| selection.matches(item.provider()))
        .collect()
}

/// Removes the item with `id`, keeping the order of the rest.
///
/// Returns the removed item, or `None` when no item carries that id.
pub fn remove_by_id<T: CatalogItem>(items: &mut Vec<T>, id: &ItemId) -> Option<T> {
    let position = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::FileItem;
    use crate::domain::provider::Provider;

    fn file(id: u64, provider: Provider) -> FileItem {
        FileItem {
            id: ItemId::from(id),
            name: format!("file-{id}"),
            provider,
            file_type: None,
            size: None,
            date: None,
        }
    }

    fn ids(items: &[&FileItem]) -> Vec<String> {
        items.iter().map(|f| f.id.to_string()).collect()
    }

    #[test]
    fn selecting_a_provider_keeps_only_its_items() {
        let items = vec![file(1, Provider::Device), file(2, Provider::Dropbox)];
        let filtered = filter_by_provider(&items, ProviderSelection::Only(Provider::Dropbox));
        assert_eq!(ids(&filtered), vec!["2"]);
    }

    #[test]
    fn all_returns_the_full_list_in_order() {
        let items = vec![
            file(3, Provider::OneDrive),
            file(1, Provider::Device),
            file(2, Provider::Dropbox),
        ];
        let filtered = filter_by_provider(&items, ProviderSelection::All);
        assert_eq!(ids(&filtered), vec!["3", "1", "2"]);
    }

    #[test]
    fn filter_preserves_relative_order_and_duplicates() {
        let items = vec![
            file(5, Provider::Device),
            file(4, Provider::Dropbox),
            file(5, Provider::Device),
            file(1, Provider::Device),
        ];
        let filtered = filter_by_provider(&items, ProviderSelection::Only(Provider::Device));
        assert_eq!(ids(&filtered), vec!["5", "5", "1"]);
    }

    #[test]
    fn every_selection_yields_exactly_the_matching_items() {
        let items: Vec<FileItem> = Provider::ALL
            .iter()
            .cycle()
            .take(20)
            .enumerate()
            .map(|(i, p)| file(i as u64, *p))
            .collect();

        for selection in ProviderSelection::options() {
            let filtered = filter_by_provider(&items, selection);
            let expected: Vec<&FileItem> = items
                .iter()
                .filter(|f| match selection {
                    ProviderSelection::All => true,
                    ProviderSelection::Only(p) => f.provider == p,
                })
                .collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn empty_result_is_valid() {
        let items = vec![file(1, Provider::Device)];
        assert!(filter_by_provider(&items, ProviderSelection::Only(Provider::ICloud)).is_empty());
    }

    #[test]
    fn remove_by_id_removes_one_and_keeps_order() {
        let mut items = vec![
            file(1, Provider::Device),
            file(2, Provider::Dropbox),
            file(3, Provider::Device),
        ];
        let removed = remove_by_id(&mut items, &ItemId::from(2));
        assert_eq!(removed.map(|f| f.id), Some(ItemId::from(2)));
        assert_eq!(
            items.iter().map(|f| f.id.to_string()).collect::<Vec<_>>(),
            vec!["1", "3"]
        );
    }

    #[test]
    fn remove_by_unknown_id_is_a_no_op() {
        let mut items = vec![file(1, Provider::Device)];
        assert!(remove_by_id(&mut items, &ItemId::from(9)).is_none());
        assert_eq!(items.len(), 1);
    }
}
