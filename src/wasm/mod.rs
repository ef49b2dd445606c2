//! WASM bindings for the paginator

use wasm_bindgen::prelude::*;

use crate::{chapter_html, Dimensions, PaginationConfig, PaginationError, Paginator, SourcePage};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_error(err: PaginationError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// WASM-exposed paginator bound to one page container
#[wasm_bindgen]
pub struct WasmPaginator {
    paginator: Paginator,
    dimensions: Dimensions,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator with the default line model
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WasmPaginator, JsValue> {
        let dimensions = Dimensions::new(width, height);
        dimensions.validate().map_err(js_error)?;
        Ok(Self {
            paginator: Paginator::default(),
            dimensions,
        })
    }

    /// Create a paginator from a JSON config (missing fields use defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: f32, height: f32, config_json: &str) -> Result<WasmPaginator, JsValue> {
        let dimensions = Dimensions::new(width, height);
        dimensions.validate().map_err(js_error)?;
        let config = PaginationConfig::from_json(config_json).map_err(js_error)?;
        Ok(Self {
            paginator: Paginator::new(config).map_err(js_error)?,
            dimensions,
        })
    }

    /// Update the container, e.g. after an orientation change
    #[wasm_bindgen(js_name = setDimensions)]
    pub fn set_dimensions(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        let dimensions = Dimensions::new(width, height);
        dimensions.validate().map_err(js_error)?;
        self.dimensions = dimensions;
        Ok(())
    }

    /// Lines one page holds
    #[wasm_bindgen(js_name = maxLines)]
    pub fn max_lines(&self) -> usize {
        self.paginator.max_lines(self.dimensions)
    }

    /// Paginate chapter HTML, returning the page records as JSON
    pub fn paginate(&self, html: &str) -> Result<String, JsValue> {
        let records = self
            .paginator
            .paginate(html, self.dimensions)
            .map_err(js_error)?;
        serde_json::to_string(&records).map_err(|e| js_error(e.into()))
    }

    /// Paginate source pages (JSON array from the content API)
    #[wasm_bindgen(js_name = paginatePages)]
    pub fn paginate_pages(&self, pages_json: &str) -> Result<String, JsValue> {
        let pages: Vec<SourcePage> =
            serde_json::from_str(pages_json).map_err(|e| js_error(e.into()))?;
        self.paginate(&chapter_html(&pages))
    }

    /// Pack chapter HTML into raw pages of block markup (JSON)
    #[wasm_bindgen(js_name = breakIntoPages)]
    pub fn break_into_pages(&self, html: &str) -> Result<String, JsValue> {
        let pages = self
            .paginator
            .break_into_pages(html, self.dimensions)
            .map_err(js_error)?;
        serde_json::to_string(&pages).map_err(|e| js_error(e.into()))
    }
}
