use leptos::*;

use crate::pages::staff::utils::StaffFilter;
use crate::services::StaffId;

#[derive(Clone, Copy)]
pub struct StaffDirectoryViewModel {
    pub filter: RwSignal<StaffFilter>,
    pub selected: RwSignal<Option<StaffId>>,
}

impl StaffDirectoryViewModel {
    pub fn new() -> Self {
        Self {
            filter: create_rw_signal(StaffFilter::default()),
            selected: create_rw_signal(None),
        }
    }

    pub fn select(&self, id: StaffId) {
        self.selected.set(Some(id));
    }

    pub fn back_to_list(&self) {
        self.selected.set(None);
    }
}

impl Default for StaffDirectoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_staff_directory_view_model() -> StaffDirectoryViewModel {
    match use_context::<StaffDirectoryViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = StaffDirectoryViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn selection_toggles_between_list_and_profile() {
        let runtime = create_runtime();
        let vm = StaffDirectoryViewModel::new();
        assert!(vm.selected.get().is_none());

        vm.select(StaffId(1));
        assert_eq!(vm.selected.get(), Some(StaffId(1)));

        vm.back_to_list();
        assert!(vm.selected.get().is_none());
        runtime.dispose();
    }
}
