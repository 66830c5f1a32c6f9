mod ocr;

pub use ocr::OcrService;
