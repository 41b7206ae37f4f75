mod short_url;

pub use short_url::validate_seo_keyword;
