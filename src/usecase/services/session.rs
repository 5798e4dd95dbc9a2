use crate::domain::entities::filter::FilterState;
use crate::domain::entities::result_view::ResultView;
use crate::usecase::services::lookup_service::LookupService;

/// Per-session controller: filter state plus the last rendered result.
///
/// Each handler maps (state, event) to the next state; the UI only mirrors it.
#[derive(Clone)]
pub struct LookupSession {
    lookup: LookupService,
    filter: FilterState,
    result: Option<ResultView>,
    result_visible: bool,
}

impl LookupSession {
    pub fn new(lookup: LookupService) -> Self {
        let filter = lookup.initial_filter();
        Self {
            lookup,
            filter,
            result: None,
            result_visible: false,
        }
    }

    pub fn lookup(&self) -> &LookupService {
        &self.lookup
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn select_system(&mut self, system: Option<String>) {
        self.filter.select_system(self.lookup.rows(), system);
        self.result_visible = false;
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.filter.select_category(self.lookup.rows(), category);
        self.result_visible = false;
    }

    pub fn select_equipment(&mut self, equipment: Option<String>) {
        self.filter.select_equipment(equipment);
    }

    pub fn show(&mut self) -> &ResultView {
        let view = self.lookup.render(self.filter.selection());
        self.result_visible = true;
        self.result.insert(view)
    }

    pub fn clear(&mut self) {
        self.filter.clear(self.lookup.rows());
        self.result_visible = false;
    }

    /// The rendered result, if the result area is currently shown.
    pub fn visible_result(&self) -> Option<&ResultView> {
        self.result.as_ref().filter(|_| self.result_visible)
    }
}
