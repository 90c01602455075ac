//! Interactive terminal viewer that shows binary files as raw bitmaps.
//!
//! Each line typed at the prompt is one command. Commands that change the
//! decoding settings redecode the window immediately and redraw it.

use anyhow::{Context, Result};
use app::{Canvas, Viewer};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use world::{ByteOrder, Direction, Intent, World};

/// Text and terminal rendering helpers used by the commands.
mod render {
    use app::Canvas;
    use crossterm::queue;
    use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
    use services_decoder::{DecodeOutcome, DecodedFrame, Rgba};
    use std::fmt::Write as _;
    use std::io::{self, Write};
    use world::World;

    /// Format the decoding settings, derived sizes and frame status.
    pub fn info(world: &World, frame: &DecodedFrame, outcome: &DecodeOutcome) -> String {
        let config = &world.config;
        let path = config
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string());
        let format = match config.pixel_format() {
            Ok(Some(format)) => format.name(),
            Ok(None) => "off",
            Err(_) => "unsupported",
        };

        let mut out = String::new();
        writeln!(out, "File: {path}").expect("write file");
        writeln!(out, "Endianness: {}", config.byte_order.label()).expect("write order");
        writeln!(
            out,
            "Offset: {:#X} (step {:#X})",
            config.byte_offset, world.settings.offset_step
        )
        .expect("write offset");
        writeln!(out, "Columns: {}  Lines: {}", config.columns, config.rows)
            .expect("write dimensions");
        writeln!(out, "Bytes per pixel: {} ({format})", config.bytes_per_pixel)
            .expect("write format");
        writeln!(
            out,
            "Line byte skip: {}  Pixel byte skip: {}",
            config.row_byte_padding, config.pixel_byte_padding
        )
        .expect("write padding");
        writeln!(
            out,
            "Line size: {}  Frame size: {}",
            config.row_stride(),
            config.frame_size()
        )
        .expect("write sizes");
        writeln!(
            out,
            "Scale: {}x{}",
            world.settings.scale.x, world.settings.scale.y
        )
        .expect("write scale");
        writeln!(
            out,
            "Frame: {}x{} ({})",
            frame.width(),
            frame.height(),
            status(outcome)
        )
        .expect("write frame");
        out
    }

    /// One-line description of the last decode.
    pub fn status(outcome: &DecodeOutcome) -> String {
        match outcome {
            DecodeOutcome::Idle => "not decoded yet".to_string(),
            DecodeOutcome::Decoded => "decoded".to_string(),
            DecodeOutcome::Empty => "empty".to_string(),
            DecodeOutcome::Disabled => "no pixel format selected".to_string(),
            DecodeOutcome::Retained(reason) => format!("kept previous frame: {reason}"),
        }
    }

    /// Format the packed window as a hexdump, labelled with file offsets.
    ///
    /// Each frame row restarts at its own file offset so row padding shows up
    /// as a gap in the addresses.
    pub fn hexdump(offset: u64, row_stride: usize, row_span: usize, raw: &[u8]) -> String {
        let mut out = String::new();
        if row_span == 0 || raw.is_empty() {
            writeln!(out, "{offset:08X}: <empty>").expect("write empty");
            return out;
        }
        for (y, row) in raw.chunks(row_span).enumerate() {
            let row_base = offset.saturating_add((y as u64).saturating_mul(row_stride as u64));
            for (i, chunk) in row.chunks(16).enumerate() {
                let base = row_base.saturating_add(i as u64 * 16);
                let bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
                writeln!(out, "{base:08X}: {}", bytes.join(" ")).expect("write row");
            }
        }
        out
    }

    /// Draw the canvas with half-block cells, two canvas rows per text line.
    ///
    /// Output is clipped to `max_cols` by `max_lines`; returns whether any of
    /// the canvas was cut off.
    pub fn draw<W: Write>(
        out: &mut W,
        canvas: &Canvas,
        max_cols: usize,
        max_lines: usize,
    ) -> io::Result<bool> {
        let width = canvas.width().min(max_cols);
        let height = canvas.height().min(max_lines.saturating_mul(2));

        for y in (0..height).step_by(2) {
            for x in 0..width {
                let top = canvas.pixel(x, y).unwrap_or(Rgba::MAGENTA);
                let bottom = if y + 1 < height {
                    canvas.pixel(x, y + 1).map(rgb).unwrap_or(Color::Reset)
                } else {
                    Color::Reset
                };
                queue!(
                    out,
                    SetForegroundColor(rgb(top)),
                    SetBackgroundColor(bottom),
                    Print('\u{2580}')
                )?;
            }
            queue!(out, ResetColor, Print('\n'))?;
        }
        out.flush()?;
        Ok(width < canvas.width() || height < canvas.height())
    }

    fn rgb(px: Rgba) -> Color {
        Color::Rgb {
            r: px.r,
            g: px.g,
            b: px.b,
        }
    }
}

/// Browse binary files as raw, uncompressed bitmaps.
#[derive(Parser, Debug)]
#[command(author, version, about = "Browse binary files as raw bitmaps", long_about = None)]
struct Cli {
    /// File to open at startup.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a file (read-only).
    Path {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Byte order applied to multi-byte pixels.
    Order {
        #[arg(value_enum)]
        order: OrderArg,
    },
    /// Jump to a byte offset (decimal or hex, e.g. 0x4000).
    Offset {
        #[arg(value_parser = parse_u64, value_name = "OFFSET")]
        offset: u64,
    },
    /// Bytes moved by `fwd` and `back`.
    OffsetStep {
        #[arg(value_parser = parse_u64, value_name = "STEP")]
        step: u64,
    },
    /// Move the offset forward by the offset step.
    Fwd,
    /// Move the offset back by the offset step.
    Back,
    /// Pixels per row.
    Columns {
        #[arg(value_parser = parse_usize, value_name = "N")]
        columns: usize,
    },
    /// Rows per frame.
    Rows {
        #[arg(value_parser = parse_usize, value_name = "N")]
        rows: usize,
    },
    /// Bytes per pixel: 0 (off), 1 (gray), 2 (rgb555), 3 (rgb), 4 (rgba).
    Bpp {
        #[arg(value_parser = parse_usize, value_name = "N")]
        bpp: usize,
    },
    /// Bytes skipped at the end of each row.
    RowPad {
        #[arg(value_parser = parse_usize, value_name = "N")]
        padding: usize,
    },
    /// Bytes skipped after each pixel.
    PixelPad {
        #[arg(value_parser = parse_usize, value_name = "N")]
        padding: usize,
    },
    /// Move forward by one row.
    NextRow,
    /// Move back by one row.
    PrevRow,
    /// Move forward by one frame.
    NextFrame,
    /// Move back by one frame.
    PrevFrame,
    /// Display scale per axis.
    Scale {
        #[arg(value_parser = parse_u32, value_name = "X")]
        x: u32,
        #[arg(value_parser = parse_u32, value_name = "Y")]
        y: u32,
    },
    /// Re-read the file and redraw.
    Show,
    /// Print settings and derived sizes.
    Info,
    /// Hexdump the decoded window.
    Hex,
    /// Print the decoding settings as JSON.
    Config,
    /// Write the displayed image to a PNG file.
    Save {
        #[arg(value_name = "PNG")]
        file: PathBuf,
    },
    /// Leave the viewer.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderArg {
    /// Last byte of a pixel holds the first channel.
    Little,
    /// First byte of a pixel holds the first channel.
    Big,
}

impl From<OrderArg> for ByteOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Little => ByteOrder::LittleEndian,
            OrderArg::Big => ByteOrder::BigEndian,
        }
    }
}

/// What a parsed command asks the session to do.
#[derive(Debug)]
enum Action {
    Apply(Intent),
    Info,
    Hex,
    Config,
    Save(PathBuf),
    Quit,
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        let intent = match command {
            Command::Path { file } => Intent::SetPath(Some(file)),
            Command::Order { order } => Intent::SetByteOrder(order.into()),
            Command::Offset { offset } => Intent::SetOffset(offset),
            Command::OffsetStep { step } => Intent::SetOffsetStep(step),
            Command::Fwd => Intent::StepOffset(Direction::Forward),
            Command::Back => Intent::StepOffset(Direction::Back),
            Command::Columns { columns } => Intent::SetColumns(columns),
            Command::Rows { rows } => Intent::SetRows(rows),
            Command::Bpp { bpp } => Intent::SetBytesPerPixel(bpp),
            Command::RowPad { padding } => Intent::SetRowPadding(padding),
            Command::PixelPad { padding } => Intent::SetPixelPadding(padding),
            Command::NextRow => Intent::StepRow(Direction::Forward),
            Command::PrevRow => Intent::StepRow(Direction::Back),
            Command::NextFrame => Intent::StepFrame(Direction::Forward),
            Command::PrevFrame => Intent::StepFrame(Direction::Back),
            Command::Scale { x, y } => Intent::SetScale { x, y },
            Command::Show => Intent::Reload,
            Command::Info => return Action::Info,
            Command::Hex => return Action::Hex,
            Command::Config => return Action::Config,
            Command::Save { file } => return Action::Save(file),
            Command::Quit => return Action::Quit,
        };
        Action::Apply(intent)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut viewer = Viewer::new(World::new());
    if let Some(file) = cli.file {
        viewer.apply(Intent::SetPath(Some(file)))?;
    }

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "rawview: type `help` for commands")?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        if run_line(&mut viewer, &line, &mut out)? == Flow::Quit {
            break;
        }
        prompt(&mut out)?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Parses and executes one prompt line. Only output failures are errors.
fn run_line<W: Write>(viewer: &mut Viewer, line: &str, out: &mut W) -> Result<Flow> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Flow::Continue);
    }
    match Line::try_parse_from(words) {
        Ok(parsed) => execute(viewer, parsed.command.into(), out),
        Err(err) => {
            write!(out, "{err}")?;
            Ok(Flow::Continue)
        }
    }
}

fn execute<W: Write>(viewer: &mut Viewer, action: Action, out: &mut W) -> Result<Flow> {
    debug!("executing {action:?}");
    match action {
        Action::Apply(intent) => match viewer.apply(intent) {
            Ok(applied) if applied.redraw => present(viewer, out)?,
            Ok(_) => {}
            Err(err) => writeln!(out, "error: {err}")?,
        },
        Action::Info => {
            write!(
                out,
                "{}",
                render::info(viewer.world(), viewer.frame(), viewer.outcome())
            )?;
        }
        Action::Hex => {
            let config = &viewer.world().config;
            write!(
                out,
                "{}",
                render::hexdump(
                    config.byte_offset,
                    config.row_stride(),
                    config.row_pixel_span(),
                    viewer.frame().raw()
                )
            )?;
        }
        Action::Config => {
            let json = serde_json::to_string_pretty(&viewer.world().config)?;
            writeln!(out, "{json}")?;
        }
        Action::Save(path) => match save_png(&viewer.canvas(), &path) {
            Ok(()) => writeln!(out, "saved {}", path.display())?,
            Err(err) => writeln!(out, "error: {err:#}")?,
        },
        Action::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Redraws the current frame sized to the terminal, then the status line.
fn present<W: Write>(viewer: &Viewer, out: &mut W) -> Result<()> {
    let (cols, lines) = crossterm::terminal::size().unwrap_or((80, 24));
    let canvas = viewer.canvas().flatten();
    let clipped = render::draw(
        out,
        &canvas,
        cols as usize,
        (lines as usize).saturating_sub(2),
    )?;
    if clipped {
        writeln!(
            out,
            "(clipped to terminal, canvas is {}x{})",
            canvas.width(),
            canvas.height()
        )?;
    }
    writeln!(out, "{}", render::status(viewer.outcome()))?;
    Ok(())
}

fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let width = u32::try_from(canvas.width()).context("canvas too wide")?;
    let height = u32::try_from(canvas.height()).context("canvas too tall")?;
    let image = image::RgbaImage::from_raw(width, height, canvas.to_rgba_bytes())
        .context("canvas buffer does not match its dimensions")?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {path:?}"))?;
    Ok(())
}

fn parse_u64(input: &str) -> Result<u64, String> {
    if let Some(stripped) = input.strip_prefix("0x") {
        u64::from_str_radix(stripped, 16).map_err(|_| format!("invalid hex value '{input}'"))
    } else {
        input
            .parse::<u64>()
            .map_err(|_| format!("invalid number '{input}'"))
    }
}

fn parse_usize(input: &str) -> Result<usize, String> {
    let value = parse_u64(input)?;
    usize::try_from(value).map_err(|_| format!("value '{input}' is too large"))
}

fn parse_u32(input: &str) -> Result<u32, String> {
    let value = parse_u64(input)?;
    u32::try_from(value).map_err(|_| format!("value '{input}' is too large"))
}
