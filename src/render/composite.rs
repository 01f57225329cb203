use crate::foundation::{
    error::{DocError, DocResult},
    math::mul_div255_u8,
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// How source pixels combine with the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Porter-Duff source-over.
    #[default]
    SourceOver,
    /// Porter-Duff XOR: each side survives only where the other is transparent.
    Xor,
}

impl CompositeMode {
    /// Combine one source pixel onto one destination pixel.
    pub fn apply(self, dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
        match self {
            Self::SourceOver => over(dst, src),
            Self::Xor => xor(dst, src),
        }
    }
}

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Premultiplied XOR: `src·(1 − αd) + dst·(1 − αs)`.
pub fn xor(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let inv_src = 255u16 - u16::from(src[3]);
    let inv_dst = 255u16 - u16::from(dst[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        let s = mul_div255_u8(u16::from(src[i]), inv_dst);
        let d = mul_div255_u8(u16::from(dst[i]), inv_src);
        out[i] = s.saturating_add(d);
    }
    out
}

/// Composite two equally sized premultiplied RGBA8 buffers in place.
pub fn composite_in_place(dst: &mut [u8], src: &[u8], mode: CompositeMode) -> DocResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(DocError::render(
            "composite_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 && mode == CompositeMode::SourceOver {
            continue;
        }
        let out = mode.apply([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
