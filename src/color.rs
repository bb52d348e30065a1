use sdl2::pixels::Color;

/// Converts hue (0-360), saturation and value (0-1) into an opaque color.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let sector = (h / 60.).floor();
    let f = h / 60. - sector;
    let p = v * (1. - s);
    let q = v * (1. - f * s);
    let t = v * (1. - (1. - f) * s);
    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::RGBA(to_channel(r), to_channel(g), to_channel(b), 255)
}

/// Scales a unit fraction to a 0-255 channel.
pub fn to_channel(fraction: f32) -> u8 {
    (fraction * 255.).round().clamp(0., 255.) as u8
}
