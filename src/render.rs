use crate::config::{BubbleConfig, RenderConfig};
use crate::placement::AnchorBox;
use crate::popup::BubbleLayout;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Render one bubble at the origin of its own bounds.
pub fn render_svg(layout: &BubbleLayout, config: &BubbleConfig, theme: &Theme) -> String {
    let width = layout.outer_width.max(1.0);
    let height = layout.outer_height.max(1.0);
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));
    push_shadow_defs(&mut svg, config);
    svg.push_str(&bubble_path_svg(layout, config, theme));
    svg.push_str("</svg>");
    svg
}

/// Render a placement scene: the anchor box plus the bubble translated to
/// its computed draw origin, on a fixed-size canvas.
pub fn render_scene_svg(
    layout: &BubbleLayout,
    origin: (f32, f32),
    anchor: &AnchorBox,
    config: &BubbleConfig,
    theme: &Theme,
    render: &RenderConfig,
) -> String {
    let width = render.width.max(1.0);
    let height = render.height.max(1.0);
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        render.background
    ));
    push_shadow_defs(&mut svg, config);
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"2\" ry=\"2\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        anchor.x, anchor.y, anchor.width, anchor.height, theme.anchor_fill, theme.anchor_border
    ));
    svg.push_str(&format!(
        "<g transform=\"translate({:.2} {:.2})\">",
        origin.0, origin.1
    ));
    svg.push_str(&bubble_path_svg(layout, config, theme));
    svg.push_str("</g>");
    svg.push_str("</svg>");
    svg
}

fn push_shadow_defs(svg: &mut String, config: &BubbleConfig) {
    if !config.shadow.enabled {
        return;
    }
    svg.push_str(&format!(
        "<defs><filter id=\"bubble-shadow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\"><feDropShadow dx=\"{:.2}\" dy=\"{:.2}\" stdDeviation=\"{:.2}\" flood-color=\"{}\"/></filter></defs>",
        config.shadow.offset_x,
        config.shadow.offset_y,
        config.shadow.radius,
        config.shadow.color
    ));
}

fn bubble_path_svg(layout: &BubbleLayout, config: &BubbleConfig, theme: &Theme) -> String {
    let fill = config.fill.as_deref().unwrap_or(&theme.bubble_fill);
    let filter = if config.shadow.enabled {
        " filter=\"url(#bubble-shadow)\""
    } else {
        ""
    };
    // Corner smoothing is a renderer-side effect: stroking the sharp polygon
    // with a round-join stroke in the fill color rounds every junction by
    // the corner radius. The geometry itself stays a sharp polygon.
    let rounding = if config.corner_radius > 0.0 {
        format!(
            " stroke=\"{}\" stroke-width=\"{:.2}\" stroke-linejoin=\"round\"",
            fill,
            config.corner_radius * 2.0
        )
    } else {
        String::new()
    };
    format!(
        "<path d=\"{}\" fill=\"{}\"{}{}/>",
        layout.path.to_svg_d(),
        fill,
        rounding,
        filter
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(480.0, 320.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}
