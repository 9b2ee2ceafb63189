use crate::config::SortHeaderConfig;
use crate::domain::entities::header::HeaderCell;
use crate::domain::entities::ordering::SortableSet;
use crate::error::Result;
use crate::infra::env::page_env::PageEnvironment;
use crate::infra::url::page_url::PageUrl;
use crate::usecase::services::header_sort_controller::{
    HeaderPlan, HeaderSortController, SortContext,
};

/// Runs one header pass for a listing page with the configured presentation.
pub struct HeaderService {
    config: SortHeaderConfig,
}

impl HeaderService {
    pub fn new(config: SortHeaderConfig) -> Self {
        Self { config }
    }

    /// Page address that reads and writes the configured ordering param.
    pub fn page_url(&self, address: &str) -> Result<PageUrl> {
        Ok(PageUrl::parse(address)?.with_param(self.config.ordering_param.clone()))
    }

    pub fn environment(&self, page: &PageUrl, sortable: SortableSet) -> PageEnvironment {
        let page = page.clone().with_param(self.config.ordering_param.clone());
        PageEnvironment::from_url(&page, sortable)
    }

    pub fn decorate(
        &self,
        page: &PageUrl,
        env: &PageEnvironment,
        cells: &mut Vec<HeaderCell>,
    ) -> Vec<HeaderPlan> {
        let links = page.clone().with_param(self.config.ordering_param.clone());
        let decorator = self.config.presentation.decorator();
        let controller = HeaderSortController::new(SortContext {
            token: env.o_field.clone(),
            sortable: env.valid_sorting_columns.clone(),
            links: &links,
            decorator: decorator.as_ref(),
        });
        controller.apply(cells)
    }

    /// Fresh cells for `labels`, decorated for the current page.
    pub fn header_cells<I, S>(
        &self,
        page: &PageUrl,
        env: &PageEnvironment,
        labels: I,
    ) -> Vec<HeaderCell>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = labels.into_iter().map(HeaderCell::new).collect::<Vec<_>>();
        self.decorate(page, env, &mut cells);
        cells
    }
}
