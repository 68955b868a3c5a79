use glam::Vec4;

// --- Helper Functions ---

#[inline]
fn srgb_channel_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// 8-bit sRGB color to an opaque linear RGBA vector, as expected by an sRGB surface.
pub fn rgb8_to_linear(rgb: [u8; 3]) -> Vec4 {
    Vec4::new(
        srgb_channel_to_linear(rgb[0]),
        srgb_channel_to_linear(rgb[1]),
        srgb_channel_to_linear(rgb[2]),
        1.0,
    )
}

pub fn to_wgpu_color(color: Vec4) -> wgpu::Color {
    wgpu::Color {
        r: color.x as f64,
        g: color.y as f64,
        b: color.z as f64,
        a: color.w as f64,
    }
}
