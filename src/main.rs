use fraxel::{
    bmp, sierpinski, Brush, Heightmap, PixelBuffer, Point, RasterError, RenderConfig, Result, Rgb,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Elevation range of the generated terrain (12-bit heights)
const MAX_ELEVATION: i32 = 1 << 12;

/// Parse command line arguments into a render config. Flags override values
/// from `--config FILE`; anything unset falls back to defaults.
fn parse_args() -> Result<RenderConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = RenderConfig::default();

    // A config file has to win before the flag overrides, so find it first
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            config = RenderConfig::load(&args[i + 1])?;
        }
        i += 1;
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => i += 1, // handled above
            "--scene" | "-s" => {
                if i + 1 < args.len() {
                    config.scene = args[i + 1].clone();
                    i += 1;
                }
            },
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<i32>() {
                        config.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<i32>() {
                        config.height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<i32>(), parts[1].parse::<i32>()) {
                            config.width = w;
                            config.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--seed" => {
                if i + 1 < args.len() {
                    if let Ok(seed) = args[i + 1].parse::<u64>() {
                        config.seed = seed;
                    }
                    i += 1;
                }
            },
            "--border" | "-b" => {
                if i + 1 < args.len() {
                    if let Ok(b) = args[i + 1].parse::<i32>() {
                        config.border = b;
                    }
                    i += 1;
                }
            },
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    config.output = args[i + 1].clone();
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: fraxel [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --scene S, -s S       Scene to render: composite, carpet, terrain");
                println!("  --config FILE         Load a render config (JSON); flags override it");
                println!("  --width W, -w W       Image width (default: 1920)");
                println!("  --height H, -h H      Image height (default: 1920)");
                println!("  --resolution WxH, -r WxH  Set both (e.g., 1080x1080)");
                println!("  --seed N              Random seed for terrain generation (default: 0)");
                println!("  --border B, -b B      Margin around the figure in pixels (default: 32)");
                println!("  --out FILE, -o FILE   Output path (default: render.bmp)");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    Ok(config)
}

/// Full-frame terrain: the heightmap shaded black to white.
fn render_terrain(buffer: &mut PixelBuffer, rng: &mut StdRng) -> Result<()> {
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;
    let map = Heightmap::generate(w.max(h) as u32, MAX_ELEVATION, 1, rng);
    let shaded = Brush::terrain(map, 0, 0, w, h, Rgb::BLACK, Rgb::WHITE);
    buffer.fill_rect(0, 0, w as u32, h as u32, &shaded)
}

/// Sierpinski carpet over two opposing axial gradients: the background fades
/// cyan to magenta across the image, the knocked-out centers fade the other
/// way.
fn render_carpet(buffer: &mut PixelBuffer, border: i32) -> Result<()> {
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;
    let cyan = Rgb::new(0, 255, 255);
    let magenta = Rgb::new(255, 0, 255);

    // Vertical control line on the left edge, boundary line at the right edge
    let a = Point::new(0, 0);
    let b = Point::new(0, 1);
    let c = Point::new(w, 0);
    let background = Brush::AxialGradient {
        a,
        b,
        c,
        color1: cyan,
        color2: magenta,
    };
    let foreground = Brush::AxialGradient {
        a,
        b,
        c,
        color1: magenta,
        color2: cyan,
    };

    sierpinski::carpet(
        buffer,
        border,
        border,
        (w - 2 * border) as u32,
        (h - 2 * border) as u32,
        &background,
        &foreground,
    )
}

/// Sierpinski triangle drawn in inverted colors over a terrain background.
fn render_composite(buffer: &mut PixelBuffer, border: i32, rng: &mut StdRng) -> Result<()> {
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;
    let inner_w = w - 2 * border;
    let inner_h = h - 2 * border;

    let map = Heightmap::generate(inner_w.max(inner_h) as u32, MAX_ELEVATION, 1, rng);
    let background = Brush::terrain(
        map,
        border,
        border,
        inner_w,
        inner_h,
        Rgb::new(32, 32, 2),
        Rgb::new(224, 224, 224),
    );
    buffer.fill_rect(border, border, inner_w as u32, inner_h as u32, &background)?;

    // The triangle leaves its background untouched and inverts whatever the
    // terrain put under its medial triangles
    sierpinski::triangle(
        buffer,
        2 * border,
        2 * border,
        (w - 4 * border) as u32,
        (h - 4 * border) as u32,
        &Brush::NoOp,
        &Brush::Invert,
    )
}

fn render(config: &RenderConfig) -> Result<PixelBuffer> {
    let mut buffer = PixelBuffer::new(config.width, config.height)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    match config.scene.as_str() {
        "terrain" => render_terrain(&mut buffer, &mut rng)?,
        "carpet" => render_carpet(&mut buffer, config.border)?,
        "composite" => render_composite(&mut buffer, config.border, &mut rng)?,
        other => {
            return Err(RasterError::Config(format!(
                "unknown scene '{}' (expected composite, carpet, or terrain)",
                other
            )))
        },
    }
    Ok(buffer)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_args()?;
    info!(
        "rendering '{}' at {}x{} (seed {})",
        config.scene, config.width, config.height, config.seed
    );

    let buffer = render(&config)?;
    bmp::save(&buffer, &config.output)?;
    info!("wrote {}", config.output);

    Ok(())
}
