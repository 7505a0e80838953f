// 7 days
pub const JWT_EXP: u64 = 60 * 60 * 24 * 7;
