//! # lsb_steg 库
//!
//! 本库包含哨兵帧 LSB 隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod framing;
pub mod handler;
pub mod steganography;
