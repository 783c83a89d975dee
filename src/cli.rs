use crate::config::load_config;
use crate::placement::{AnchorBox, Side, place};
use crate::popup::layout_bubble;
use crate::render::{render_scene_svg, render_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bblr", version, about = "Speech-bubble callout renderer")]
pub struct Args {
    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Content width the bubble wraps (the opaque child element)
    #[arg(long = "contentWidth", default_value_t = 160.0)]
    pub content_width: f32,

    /// Content height the bubble wraps
    #[arg(long = "contentHeight", default_value_t = 48.0)]
    pub content_height: f32,

    /// Arrow orientation override (left|top|right|bottom)
    #[arg(long = "orientation")]
    pub orientation: Option<String>,

    /// Anchor box "x,y,width,height"; renders a placement scene when given
    #[arg(short = 'a', long = "anchor")]
    pub anchor: Option<String>,

    /// Side of the anchor the bubble attaches to
    #[arg(short = 's', long = "side", value_enum, default_value = "bottom")]
    pub side: SideArg,

    /// Gap between anchor and bubble; overrides the config margin
    #[arg(short = 'm', long = "margin")]
    pub margin: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SideArg {
    Top,
    Bottom,
    Left,
    Right,
}

impl SideArg {
    fn side(self) -> Side {
        match self {
            SideArg::Top => Side::Top,
            SideArg::Bottom => Side::Bottom,
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(token) = args.orientation.as_deref() {
        config.bubble.orientation = crate::geometry::Orientation::from_token(token)
            .ok_or_else(|| anyhow::anyhow!("Unknown orientation: {token}"))?;
    }
    if let Some(margin) = args.margin {
        config.bubble.margin = margin;
    }
    config.bubble = config.bubble.sanitized();

    let svg = match args.anchor.as_deref() {
        Some(spec) => {
            let anchor = parse_anchor(spec)?;
            let side = args.side.side();
            config.bubble.orientation = side.arrow_orientation();
            let layout = layout_bubble(args.content_width, args.content_height, &config.bubble);
            let origin = place(&anchor, layout.size(), side, config.bubble.margin);
            render_scene_svg(
                &layout,
                origin,
                &anchor,
                &config.bubble,
                &config.theme,
                &config.render,
            )
        }
        None => {
            let layout = layout_bubble(args.content_width, args.content_height, &config.bubble);
            render_svg(&layout, &config.bubble, &config.theme)
        }
    };

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = args
                    .output
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
                crate::render::write_output_png(&svg, output, &config.render)?;
            }
            #[cfg(not(feature = "png"))]
            {
                return Err(anyhow::anyhow!("Built without png support"));
            }
        }
    }

    Ok(())
}

fn parse_anchor(spec: &str) -> Result<AnchorBox> {
    let parts: Vec<f32> = spec
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| anyhow::anyhow!("Invalid anchor spec: {spec} (expected x,y,width,height)"))?;
    if parts.len() != 4 {
        return Err(anyhow::anyhow!(
            "Invalid anchor spec: {spec} (expected x,y,width,height)"
        ));
    }
    Ok(AnchorBox {
        x: parts[0],
        y: parts[1],
        width: parts[2],
        height: parts[3],
    })
}
