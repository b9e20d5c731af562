pub mod cache;
pub mod contrast;
pub mod convert;
pub mod cvd;
pub mod generate;
pub mod input;
pub mod report;

pub use cache::{handle_cache_status, handle_clear_cache};
pub use cache::{__path_handle_cache_status, __path_handle_clear_cache};
pub use contrast::{handle_contrast, ContrastRequest, ContrastResponse, __path_handle_contrast};
pub use convert::{
    handle_convert, ConvertRequest, ConvertResponse, FormattedColour, __path_handle_convert,
};
pub use cvd::{
    handle_category_check, handle_contrast_fix, handle_distinguish_fix, handle_palette_check,
    handle_simulate, CategoryCheckRequest, ContrastFixRequest, ContrastFixResponse,
    DistinguishFixRequest, DistinguishFixResponse, PaletteCheckRequest, PaletteCheckResponse,
    SimulateRequest, SimulateResponse, SimulatedColour,
};
pub use cvd::{
    __path_handle_category_check, __path_handle_contrast_fix, __path_handle_distinguish_fix,
    __path_handle_palette_check, __path_handle_simulate,
};
pub use generate::{
    handle_harmony, handle_mix, handle_random, handle_scale, handle_variations, HarmonyRequest,
    HarmonyResponse, MixRequest, MixResponse, RandomResponse, ScaleRequest, ScaleResponse,
    VariationsRequest, VariationsResponse,
};
pub use generate::{
    __path_handle_harmony, __path_handle_mix, __path_handle_random, __path_handle_scale,
    __path_handle_variations,
};
pub use report::{
    handle_add_review, handle_list_reviews, handle_remove_review, handle_report, ReportRequest,
    ReviewRequest, ReviewsResponse,
};
pub use report::{
    __path_handle_add_review, __path_handle_list_reviews, __path_handle_remove_review,
    __path_handle_report,
};
