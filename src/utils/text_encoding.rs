use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::{debug, warn};

/// 解码后的页面文本
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
    pub had_errors: bool,
}

/// 按内容嗅探得到的编码解码页面
///
/// 先看 BOM，其次交给 chardetng 猜测编码，不使用固定编码
pub fn decode_html(input: &[u8]) -> DecodedText {
    let encoding = detect_encoding(input);
    debug!("检测到编码: {}", encoding.name());

    let (decoded, actual, had_errors) = encoding.decode(input);
    if had_errors {
        warn!("按 {} 解码时出现无效字节，已替换", actual.name());
    }

    DecodedText {
        text: decoded.into_owned(),
        encoding: actual.name(),
        had_errors,
    }
}

fn detect_encoding(input: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(input) {
        return encoding;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(input, true);
    detector.guess(None, true)
}
