use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::filter::{FilterSelection, FilterState};
use crate::domain::entities::record::{Dataset, Record};
use crate::domain::entities::result_view::{ResultCard, ResultView};
use crate::domain::format::{clean_equip, date_only, kv, REMARK_LABEL};

pub const CATEGORY_LABEL: &str = "Category";
pub const EQUIPMENT_LABEL: &str = "Equipment";
pub const LOGIN_LABEL: &str = "Login ID";
pub const PASSWORD_LABEL: &str = "Password";
pub const EFFECTIVE_DATE_LABEL: &str = "Password Effective Date";

/// Read-only lookups over a loaded dataset.
#[derive(Clone)]
pub struct LookupService {
    dataset: Arc<Dataset>,
}

impl LookupService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn systems(&self) -> &[String] {
        &self.dataset.systems
    }

    pub fn rows(&self) -> &[Record] {
        &self.dataset.rows
    }

    pub fn initial_filter(&self) -> FilterState {
        FilterState::new(self.systems(), self.rows())
    }

    pub fn render(&self, selection: &FilterSelection) -> ResultView {
        if selection.is_unset() {
            debug!(rows = self.rows().len(), "rendering without filters");
        }
        let view = render_results(self.rows(), selection);
        info!(
            system = ?selection.system,
            category = ?selection.category,
            equipment = ?selection.equipment,
            matches = view.card_count(),
            "rendered lookup result"
        );
        view
    }
}

/// Rows matching every set slot of `selection`, in dataset order.
pub fn filter_rows<'a>(rows: &'a [Record], selection: &FilterSelection) -> Vec<&'a Record> {
    rows.iter().filter(|row| selection.matches(row)).collect()
}

pub fn render_results(rows: &[Record], selection: &FilterSelection) -> ResultView {
    let matches = filter_rows(rows, selection);
    let Some(first) = matches.first() else {
        return ResultView::NoMatch;
    };

    let category = selection
        .category
        .clone()
        .unwrap_or_else(|| first.category.clone());
    let equipment = selection
        .equipment
        .clone()
        .unwrap_or_else(|| first.equipment.clone());
    let header = [
        kv(CATEGORY_LABEL, &category, false),
        kv(EQUIPMENT_LABEL, &clean_equip(&equipment), false),
    ]
    .into_iter()
    .flatten()
    .collect();

    let cards = matches
        .iter()
        .enumerate()
        .map(|(idx, row)| render_card(idx + 1, row))
        .collect();

    ResultView::Matches { header, cards }
}

fn render_card(number: usize, row: &Record) -> ResultCard {
    let effective_date = date_only(&row.date);
    let fields = [
        kv(LOGIN_LABEL, &row.login, true),
        kv(PASSWORD_LABEL, &row.password, true),
        kv(REMARK_LABEL, &row.remark, false),
        kv(EFFECTIVE_DATE_LABEL, &effective_date, false),
    ]
    .into_iter()
    .flatten()
    .collect();
    ResultCard { number, fields }
}
