//! Project List View-Model
//!
//! Search filtering and pagination over the fetched project collection.
//! Pure state: the page component feeds it backend results and renders
//! whatever it derives.

use crate::models::{Proyecto, ProyectoId};

/// Projects shown per page
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel {
    all_items: Vec<Proyecto>,
    query: String,
    current_page: usize,
    page_size: usize,
}

impl Default for ListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewModel {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            all_items: Vec::new(),
            query: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn items(&self) -> &[Proyecto] {
        &self.all_items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True when nothing was fetched at all (as opposed to nothing matching)
    pub fn is_empty(&self) -> bool {
        self.all_items.is_empty()
    }

    /// Replace the collection. Keeps query and page, clamping the page if it vanished.
    pub fn set_items(&mut self, items: Vec<Proyecto>) {
        self.all_items = items;
        self.clamp_page();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.current_page = 1;
    }

    /// Items whose `nombre descripcion estado` contains the query, case-insensitively
    pub fn filtered(&self) -> Vec<&Proyecto> {
        let needle = self.query.to_lowercase();
        self.all_items
            .iter()
            .filter(|p| needle.is_empty() || haystack(p).contains(&needle))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Zero when nothing matches; the caller shows an empty state instead of a pager.
    pub fn total_pages(&self) -> usize {
        let count = self.filtered_count();
        if count == 0 {
            0
        } else {
            count.div_ceil(self.page_size).max(1)
        }
    }

    /// Slice of the filtered items for page `n`, with `n` clamped into range.
    pub fn page(&self, n: usize) -> Vec<&Proyecto> {
        let filtered = self.filtered();
        let total = pages_for(filtered.len(), self.page_size);
        if total == 0 {
            return Vec::new();
        }
        let n = n.clamp(1, total);
        let start = (n - 1) * self.page_size;
        let end = (start + self.page_size).min(filtered.len());
        filtered[start..end].to_vec()
    }

    /// The page currently on screen
    pub fn visible(&self) -> Vec<&Proyecto> {
        self.page(self.current_page)
    }

    /// Move to page `n`. Out-of-range requests leave the current page untouched.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }
        self.current_page = n;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(n) => self.go_to_page(n),
            None => false,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// 1-based `(first, last, total)` of the visible window, `(0, 0, 0)` when empty
    pub fn showing(&self) -> (usize, usize, usize) {
        let total = self.filtered_count();
        if total == 0 {
            return (0, 0, 0);
        }
        let page = self.current_page.clamp(1, self.total_pages());
        let first = (page - 1) * self.page_size + 1;
        let last = (page * self.page_size).min(total);
        (first, last, total)
    }

    /// Drop a project locally after a successful delete. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: &ProyectoId) -> bool {
        let before = self.all_items.len();
        self.all_items.retain(|p| &p.id != id);
        let removed = self.all_items.len() != before;
        if removed {
            self.clamp_page();
        }
        removed
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages().max(1);
        self.current_page = self.current_page.clamp(1, total);
    }
}

fn haystack(p: &Proyecto) -> String {
    format!("{} {} {}", p.nombre, p.descripcion, p.estado).to_lowercase()
}

fn pages_for(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_proyecto(id: u32, nombre: &str, estado: i32) -> Proyecto {
        Proyecto {
            id: ProyectoId::from(id),
            nombre: nombre.to_string(),
            descripcion: format!("Descripción del proyecto {}", id),
            estado,
            fecha_inicio: None,
            fecha_fin: None,
        }
    }

    fn seven() -> Vec<Proyecto> {
        (1..=7).map(|i| make_proyecto(i, &format!("Proyecto {}", i), (i % 3 + 1) as i32)).collect()
    }

    #[test]
    fn test_seven_items_two_pages() {
        let mut vm = ListViewModel::new();
        vm.set_items(seven());

        assert_eq!(vm.total_pages(), 2);
        assert_eq!(vm.page(1).len(), 5);
        assert_eq!(vm.page(2).len(), 2);
        assert_eq!(vm.page(2)[0].id.as_str(), "6");
        assert_eq!(vm.showing(), (1, 5, 7));
    }

    #[test]
    fn test_pages_partition_filtered() {
        let mut vm = ListViewModel::new();
        vm.set_items((1..=23).map(|i| make_proyecto(i, "x", 1)).collect());

        let total = vm.total_pages();
        assert_eq!(total, 5);
        let mut seen = Vec::new();
        for n in 1..=total {
            let page = vm.page(n);
            assert!(page.len() <= PAGE_SIZE);
            seen.extend(page.into_iter().map(|p| p.id.clone()));
        }
        let expected: Vec<_> = vm.filtered().into_iter().map(|p| p.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let mut vm = ListViewModel::new();
        vm.set_items(vec![
            make_proyecto(1, "Portal WEB", 1),
            make_proyecto(2, "App móvil", 2),
            make_proyecto(3, "web interna", 3),
        ]);

        vm.set_query("Web");
        let ids: Vec<_> = vm.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        // estado is searchable through its numeric form
        vm.set_query("2");
        let ids: Vec<_> = vm.filtered().iter().map(|p| p.id.as_str()).collect();
        assert!(ids.contains(&"2"));

        vm.set_query("no existe");
        assert!(vm.filtered().is_empty());
        assert_eq!(vm.total_pages(), 0);
        assert!(vm.visible().is_empty());
        assert_eq!(vm.showing(), (0, 0, 0));
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut vm = ListViewModel::new();
        vm.set_items(seven());
        assert!(vm.go_to_page(2));
        assert_eq!(vm.current_page(), 2);

        vm.set_query("proyecto");
        assert_eq!(vm.current_page(), 1);
        vm.go_to_page(2);
        vm.set_query("proyecto");
        assert_eq!(vm.current_page(), 1);
    }

    #[test]
    fn test_out_of_range_page_is_noop() {
        let mut vm = ListViewModel::new();
        vm.set_items(seven());
        vm.go_to_page(2);

        assert!(!vm.go_to_page(0));
        assert!(!vm.go_to_page(3));
        assert!(!vm.go_to_page(usize::MAX));
        assert_eq!(vm.current_page(), 2);
        assert!(!vm.next_page());
        assert_eq!(vm.current_page(), 2);

        // page() clamps rather than failing
        assert_eq!(vm.page(0).len(), 5);
        assert_eq!(vm.page(99).len(), 2);
    }

    #[test]
    fn test_prev_next_navigation() {
        let mut vm = ListViewModel::new();
        vm.set_items(seven());
        assert!(!vm.has_prev());
        assert!(!vm.prev_page());
        assert!(vm.next_page());
        assert!(vm.has_prev());
        assert!(!vm.has_next());
        assert!(vm.prev_page());
        assert_eq!(vm.current_page(), 1);
    }

    #[test]
    fn test_set_items_keeps_query_and_page() {
        let mut vm = ListViewModel::new();
        vm.set_items(seven());
        vm.go_to_page(2);
        vm.set_items(seven());
        assert_eq!(vm.current_page(), 2);

        vm.set_query("proyecto");
        vm.set_items(seven());
        assert_eq!(vm.query(), "proyecto");
    }

    #[test]
    fn test_remove_by_id_is_idempotent() {
        let mut vm = ListViewModel::new();
        vm.set_items(seven());
        let id = ProyectoId::from(3);

        assert!(vm.remove_by_id(&id));
        let after_first = vm.items().to_vec();
        assert!(!vm.remove_by_id(&id));
        assert_eq!(vm.items(), after_first.as_slice());
        assert_eq!(vm.items().len(), 6);
    }

    #[test]
    fn test_removing_last_item_of_page_clamps() {
        let mut vm = ListViewModel::new();
        vm.set_items(make_six());
        vm.go_to_page(2);
        assert!(vm.remove_by_id(&ProyectoId::from(6)));
        assert_eq!(vm.total_pages(), 1);
        assert_eq!(vm.current_page(), 1);
        assert_eq!(vm.visible().len(), 5);
    }

    fn make_six() -> Vec<Proyecto> {
        (1..=6).map(|i| make_proyecto(i, "p", 1)).collect()
    }
}
