//! Localized user-facing messages.
//!
//! The web app ships in Korean only, so these are plain constants rather
//! than a lookup table.

/// Staged by the navigation guard when an auth-only route is entered logged out.
pub const LOGIN_REQUIRED: &str = "로그인이 필요합니다.";

/// Staged when the refresh after a 401 fails.
pub const TOKEN_EXPIRED: &str = "토큰이 만료되었습니다.";

// Status defaults used by error message extraction
pub const BAD_REQUEST: &str = "요청 값이 올바르지 않습니다.";
pub const UNAUTHORIZED: &str = "인증에 실패했습니다.";
pub const CONFLICT: &str = "이미 사용 중인 정보가 있습니다.";

// Registration specific
pub const REGISTER_CONFLICT: &str = "이미 가입된 이메일 또는 아이디입니다.";
pub const REGISTER_FORBIDDEN: &str = "회원가입 요청이 거부되었습니다. 입력 정보를 확인해 주세요.";

// Per-operation generic fallbacks
pub const REGISTER_FAILED: &str = "회원가입에 실패했습니다.";
pub const LOGIN_FAILED: &str = "로그인에 실패했습니다.";
pub const REFRESH_FAILED: &str = "세션 갱신에 실패했습니다.";

/// Localized default for a status code, empty when the status has none.
pub fn status_default(status: u16) -> &'static str {
    match status {
        400 => BAD_REQUEST,
        401 => UNAUTHORIZED,
        409 => CONFLICT,
        _ => "",
    }
}
