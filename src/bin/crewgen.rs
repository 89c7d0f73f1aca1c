use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use crewgen::{
    CharacterSelection, DetectedFeatures, Ethnicity, Gender, SpriteLibrary, SpriteMetadata,
    TemplateVariant,
};

#[derive(Parser, Debug)]
#[command(name = "crewgen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate random character selections as JSON.
    Generate(GenerateArgs),
    /// Match detected facial features to the closest character selection.
    MatchFeatures(MatchFeaturesArgs),
    /// Render a character selection to a PNG portrait.
    Render(RenderArgs),
    /// Assemble a postcard from one or more character selections.
    Postcard(PostcardArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Character gender.
    #[arg(long, value_parser = parse_gender, default_value = "male")]
    gender: Gender,

    /// Appearance group constraining skin tones.
    #[arg(long, value_parser = parse_ethnicity, default_value = "mixed")]
    ethnicity: Ethnicity,

    /// RNG seed; omit for a random one.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of characters to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MatchFeaturesArgs {
    /// Detected-features JSON document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sprite metadata JSON document.
    #[arg(long)]
    metadata: PathBuf,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Character selection JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Assets root (the directory containing `PortraitSprites/`).
    #[arg(long)]
    assets: PathBuf,

    /// Square output size in pixels.
    #[arg(long, default_value_t = crewgen::PORTRAIT_SIZE)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PostcardArgs {
    /// JSON array of character selections.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Template variant.
    #[arg(long, default_value = "blue")]
    variant: TemplateVariant,

    /// Assets root (the directory containing `PortraitSprites/` and
    /// `PostcardTemplates/`).
    #[arg(long)]
    assets: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::MatchFeatures(args) => cmd_match_features(args),
        Command::Render(args) => cmd_render(args),
        Command::Postcard(args) => cmd_postcard(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let skin_range = args.ethnicity.skin_range();
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let characters: Vec<CharacterSelection> = (0..args.count)
        .map(|i| crewgen::synthesize_seeded(args.gender, skin_range, base_seed.wrapping_add(i as u64)))
        .collect();

    let json = if args.count == 1 {
        serde_json::to_string_pretty(&characters[0])?
    } else {
        serde_json::to_string_pretty(&characters)?
    };
    write_output(args.out.as_deref(), &json)
}

fn cmd_match_features(args: MatchFeaturesArgs) -> anyhow::Result<()> {
    let features_text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read features '{}'", args.in_path.display()))?;
    let features: DetectedFeatures =
        serde_json::from_str(&features_text).context("parse detected features")?;

    let metadata = SpriteMetadata::from_path(&args.metadata)?;
    let matched = crewgen::match_features(&features, &metadata);

    let json = serde_json::to_string_pretty(&serde_json::json!({
        "character": matched.selection,
        "confidence": matched.confidence,
    }))?;
    write_output(args.out.as_deref(), &json)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let selection = read_selection(&args.in_path)?;
    let sprites = SpriteLibrary::new(&args.assets);
    let portrait = crewgen::render_portrait(&selection, &sprites, args.size)?;
    save_png(&args.out, &portrait)
}

fn cmd_postcard(args: PostcardArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read selections '{}'", args.in_path.display()))?;
    let characters: Vec<CharacterSelection> =
        serde_json::from_str(&text).context("parse character selections")?;

    let sprites = SpriteLibrary::new(&args.assets);
    let postcard = crewgen::assemble_postcard(args.variant, &characters, &sprites, &args.assets)?;
    save_png(&args.out, &postcard)
}

fn read_selection(path: &std::path::Path) -> anyhow::Result<CharacterSelection> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read selection '{}'", path.display()))?;
    serde_json::from_str(&text).context("parse character selection")
}

fn write_output(out: Option<&std::path::Path>, json: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn save_png(path: &std::path::Path, image: &image::RgbaImage) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.to_ascii_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        other => Err(format!("unknown gender '{other}' (expected 'male' or 'female')")),
    }
}

fn parse_ethnicity(s: &str) -> Result<Ethnicity, String> {
    match s.to_ascii_lowercase().as_str() {
        "european" => Ok(Ethnicity::European),
        "african" => Ok(Ethnicity::African),
        "asian" => Ok(Ethnicity::Asian),
        "middle-eastern" | "middleeastern" => Ok(Ethnicity::MiddleEastern),
        "hispanic" => Ok(Ethnicity::Hispanic),
        "mixed" => Ok(Ethnicity::Mixed),
        other => Err(format!("unknown ethnicity '{other}'")),
    }
}
