use kinetic_core::color::{Rgba, BONE_WHITE, BOX_FILL, FLOOR_GRAY, NODE_FILL};
use kinetic_core::constants::*;
use kinetic_core::geometry::{Path, PathCmd, Stroke};
use kinetic_core::hud::{Align, Callout};
use kinetic_core::RigFrame;
use wasm_bindgen::JsValue;
use web_sys as web;

const LABEL_FONT: &str = "italic bold 10px ui-monospace, monospace";

/// Draw one rig frame, scaling the 300x400 scene to fit the canvas.
pub fn draw_scene(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    frame: &RigFrame,
) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, w, h);

    let scale = (w / VIEWBOX_WIDTH as f64).min(h / VIEWBOX_HEIGHT as f64);
    let ox = (w - VIEWBOX_WIDTH as f64 * scale) * 0.5;
    let oy = (h - VIEWBOX_HEIGHT as f64 * scale) * 0.5;
    _ = ctx.set_transform(scale, 0.0, 0.0, scale, ox, oy);

    draw_floor(ctx);

    let g = &frame.geometry;
    trace(ctx, &g.calf);
    ctx.set_fill_style_str(&g.muscle_fill.to_css());
    ctx.fill();
    stroke(ctx, g.muscle_stroke, "round");

    trace(ctx, &g.tendon);
    stroke(ctx, g.tendon_stroke, "round");

    trace(ctx, &g.bone);
    stroke(
        ctx,
        Stroke {
            color: BONE_WHITE,
            width: BONE_STROKE_WIDTH,
        },
        "round",
    );

    for c in &frame.hud.callouts {
        draw_callout(ctx, c);
    }
}

fn draw_floor(ctx: &web::CanvasRenderingContext2d) {
    ctx.begin_path();
    ctx.move_to(FLOOR_X_RANGE[0] as f64, FLOOR_Y as f64);
    ctx.line_to(FLOOR_X_RANGE[1] as f64, FLOOR_Y as f64);
    set_dash(ctx, &[4.0, 4.0]);
    stroke(
        ctx,
        Stroke {
            color: FLOOR_GRAY,
            width: 1.0,
        },
        "butt",
    );
    set_dash(ctx, &[]);
}

fn trace(ctx: &web::CanvasRenderingContext2d, path: &Path) {
    ctx.begin_path();
    for cmd in &path.cmds {
        match *cmd {
            PathCmd::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            PathCmd::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            PathCmd::QuadTo { ctrl, to } => {
                ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
            }
            PathCmd::Close => ctx.close_path(),
        }
    }
}

fn stroke(ctx: &web::CanvasRenderingContext2d, s: Stroke, cap: &str) {
    ctx.set_stroke_style_str(&s.color.to_css());
    ctx.set_line_width(s.width as f64);
    ctx.set_line_cap(cap);
    ctx.set_line_join("round");
    ctx.stroke();
}

fn set_dash(ctx: &web::CanvasRenderingContext2d, segments: &[f64]) {
    let arr = js_sys::Array::new();
    for s in segments {
        arr.push(&JsValue::from_f64(*s));
    }
    _ = ctx.set_line_dash(&arr);
}

fn draw_callout(ctx: &web::CanvasRenderingContext2d, c: &Callout) {
    // leader line
    ctx.begin_path();
    ctx.move_to(c.anchor.x as f64, c.anchor.y as f64);
    ctx.line_to(c.target.x as f64, c.target.y as f64);
    set_dash(ctx, &[2.0, 2.0]);
    ctx.set_global_alpha(0.5);
    stroke(
        ctx,
        Stroke {
            color: c.color,
            width: 0.5,
        },
        "butt",
    );
    ctx.set_global_alpha(1.0);
    set_dash(ctx, &[]);

    // label box
    let top = (c.target.y - LABEL_BOX_HEIGHT * 0.5) as f64;
    ctx.set_fill_style_str(&BOX_FILL.to_css());
    ctx.fill_rect(c.box_x as f64, top, LABEL_BOX_WIDTH as f64, LABEL_BOX_HEIGHT as f64);
    ctx.set_stroke_style_str(&c.box_stroke.to_css());
    ctx.set_line_width(1.0);
    ctx.stroke_rect(c.box_x as f64, top, LABEL_BOX_WIDTH as f64, LABEL_BOX_HEIGHT as f64);

    ctx.set_font(LABEL_FONT);
    ctx.set_text_baseline("middle");
    ctx.set_text_align(match c.align {
        Align::Start => "left",
        Align::End => "right",
    });
    ctx.set_fill_style_str(&c.color.to_css());
    _ = ctx.fill_text(c.label, c.text_x as f64, c.target.y as f64);

    if c.node {
        draw_node(ctx, c, NODE_FILL);
    }
}

fn draw_node(ctx: &web::CanvasRenderingContext2d, c: &Callout, fill: Rgba) {
    ctx.begin_path();
    _ = ctx.arc(
        c.anchor.x as f64,
        c.anchor.y as f64,
        JOINT_NODE_RADIUS as f64,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.set_fill_style_str(&fill.to_css());
    ctx.fill();
    stroke(
        ctx,
        Stroke {
            color: c.color,
            width: 2.0,
        },
        "round",
    );
}
