/// RGB 模式下每个像素的通道数。
/// 载体字节序列的长度必须是宽 × 高 × 3，按行主序排列。
pub const CHANNELS: usize = 3;

/// 消息的起始哨兵标记。
/// 解码时通过查找该字面量定位隐藏消息的开头。
pub const START_SENTINEL: &str = "[START]";

/// 消息的结束哨兵标记。
/// 位于起始标记之后的第一个该字面量即为消息的结尾。
pub const END_SENTINEL: &str = "[END]";

/// 每个字符占用的比特数。
/// 字符按 8 位码点处理，每个比特占用一个载体字节的最低位，
/// 因此隐藏一个字符需要 8 个载体字节。
pub const BITS_PER_CHAR: usize = 8;
