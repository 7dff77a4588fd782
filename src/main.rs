use std::io::{BufReader, BufWriter, Read, Write};
use std::time::Instant;
use std::{env, fs, fs::File, path::Path, path::PathBuf};

use bitpress::entropy_coding::{ACReader, ACWriter, Decoder, Encoder};
use bitpress::models::{BitTree, ShiftModel};
use bitpress::{helpers, u8, Result};

/// Byte-wise coding model: an 8-deep tree of shift models.
type ByteModel = BitTree<ShiftModel<5>, 8>;

#[derive(Clone, Copy)]
enum Action {
    Compress,
    Decompress,
    Test,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        print_usage_and_panic("Invocation doesn't match usage! Provide 2 arguments.");
    }
    let path = PathBuf::from(&args[2]);
    let action = match args[1].as_str() {
        "c" => Action::Compress,
        "d" => Action::Decompress,
        "t" => Action::Test,
        _ => {
            print_usage_and_panic("Unrecognized option -> <action>!");
            unreachable!();
        }
    };

    if !path.is_file() && !path.is_dir() {
        panic!("Path must be a file or a directory!");
    }

    if path.is_dir() {
        for file in fs::read_dir(path)? {
            let file_path = file?.path();
            if file_path.is_file() {
                run(file_path, action)?;
            }
        }
    } else {
        run(path, action)?;
    }

    Ok(())
}

fn run(file_path: PathBuf, action: Action) -> Result<()> {
    assert!(file_path.is_file());

    let mut out_path = env::current_dir()?;
    out_path.push(file_path.file_name().expect("Invalid file!"));

    let compress_path = out_path.with_extension("bin");
    let decompress_path = out_path.with_extension("orig");

    let timer = Instant::now();
    match action {
        Action::Compress => {
            compress(&file_path, &compress_path)?;
            println!("Compression took: {:?}", timer.elapsed());
        }
        Action::Decompress => {
            decompress(&file_path, &decompress_path)?;
            println!("Decompression took: {:?}", timer.elapsed());
        }
        Action::Test => {
            compress(&file_path, &compress_path)?;
            println!("Compression took: {:?}", timer.elapsed());
            let timer = Instant::now();
            decompress(&compress_path, &decompress_path)?;
            println!("Decompression took: {:?}", timer.elapsed());
            helpers::cmp(&file_path, &decompress_path)?;
        }
    }

    Ok(())
}

fn compress(input_file: &Path, output_file: &Path) -> Result<()> {
    // symbol count goes in front: the coded stream itself is headerless
    // and doesn't know its own length
    let len = fs::metadata(input_file)?.len();

    let reader = BufReader::new(File::open(input_file)?);
    let mut writer = BufWriter::new(File::create(output_file)?);
    writer.write_all(&len.to_be_bytes())?;

    let mut model = ByteModel::new();
    let mut enc = Encoder::new(ACWriter::new(writer));

    for byte_res in reader.bytes() {
        model.encode(&mut enc, u16::from(byte_res?))?;
    }

    enc.finish()?;
    Ok(())
}

fn decompress(input_file: &Path, output_file: &Path) -> Result<()> {
    let mut reader = BufReader::new(File::open(input_file)?);
    let mut len_bytes = [0u8; 8];
    reader.read_exact(&mut len_bytes)?;
    let len = u64::from_be_bytes(len_bytes);

    let mut writer = BufWriter::new(File::create(output_file)?);

    let mut model = ByteModel::new();
    let mut dec = Decoder::new(ACReader::new(reader))?;

    for _ in 0..len {
        let byte = u8!(model.decode(&mut dec)?);
        writer.write_all(&[byte])?;
    }

    writer.flush()?;
    Ok(())
}

fn print_usage_and_panic(panic_msg: &str) {
    println!("Usage: bitpress <Action> <Path>");
    println!("<Action> [single file]: c (compress), d (decompress), t (test = c + d)");
    println!("<Path> can be a single file or a directory");
    println!("Note: Directories are shallow traversed");
    panic!("{panic_msg}");
}
