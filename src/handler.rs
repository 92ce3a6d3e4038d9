//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::constants::{BITS_PER_CHAR, CHANNELS};
use crate::framing::frame;
use crate::steganography::{decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取并归一化载体图像、检查隐写空间是否足够、调用核心编码函数嵌入消息，
/// 最后将结果像素重组为图像并写入输出路径。
///
/// # Arguments
///
/// * `args` - 包含输入路径、消息文本和输出选项的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 图像没有足够的空间来隐藏消息。
/// * 消息包含无法放入单字节的字符。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let img = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    // 归一化为 RGB，每个像素三个通道字节，按行主序展平
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let carrier = rgb.into_raw();

    let required_space = frame(&args.message).chars().count() * BITS_PER_CHAR;
    let available_space = (width as usize) * (height as usize) * CHANNELS;

    anyhow::ensure!(
        available_space >= required_space,
        "Not enough space in the image to hide the message. \nRequired: {} bits, Available: {} bits",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    let encoded = encode(&carrier, &args.message).with_context(|| {
        "Failed to embed the message into the image data. \nThe message may contain characters that do not fit in a single byte."
    })?;

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.image));

    anyhow::ensure!(
        args.force || !output.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        output.to_string_lossy().red().bold()
    );

    let encoded_img = RgbImage::from_raw(width, height, encoded)
        .context("The encoded pixel data does not match the image dimensions.")?;

    encoded_img.save(&output).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "Your message has been encoded and the image was saved: {}",
        output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取并归一化经过隐写的图像文件、调用核心解码函数提取哨兵标记之间的消息，
/// 并将结果打印给用户。未找到消息属于正常结果，不视为错误。
///
/// # Arguments
///
/// * `args` - 包含输入路径的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果无法读取或解码输入的图像文件，将返回错误。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let img = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let carrier = img.to_rgb8().into_raw();

    match decode(&carrier) {
        Some(message) => println!("Message extracted:\n{}", message.green().bold()),
        None => println!("Couldn't extract a message from this image."),
    }

    Ok(())
}

/// 在输入图像旁生成默认输出路径，文件名加上 `encoded_` 前缀。
fn default_output_path(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("output.png"));

    image.with_file_name(format!("encoded_{name}"))
}
