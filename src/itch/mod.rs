//! ITCH 계열 바이너리 메시지 처리
//!
//! 필드 변환(codec), 체결 메시지 디코딩(decoder), 메시지 길이 테이블(framing)

pub mod codec;
pub mod decoder;
pub mod framing;

pub use codec::ClockMode;
pub use decoder::{MessageDecoder, TRADE_MESSAGE_LEN, TRADE_MESSAGE_TAG};
pub use framing::FramingMode;
