//! Window layout scaling.
//!
//! The demo renders at a fixed design resolution and scales it uniformly to
//! whatever size the window currently has, letterboxing on the shorter
//! axis. The computation is a pure function of the two sizes so resize
//! handling stays in the driver loop instead of a global handler.

/// Largest uniform scale at which `content` still fits inside `container`.
///
/// Returns the smaller of the two axis ratios; non-positive content
/// dimensions yield 0.
pub fn fit_scale(container_w: f32, container_h: f32, content_w: f32, content_h: f32) -> f32 {
    if content_w <= 0.0 || content_h <= 0.0 {
        return 0.0;
    }
    (container_w / content_w).min(container_h / content_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn width_limited_container_scales_by_width() {
        // 960x1080 window for 1920x1080 content: width is the bottleneck.
        assert!(approx_eq(fit_scale(960.0, 1080.0, 1920.0, 1080.0), 0.5));
    }

    #[test]
    fn height_limited_container_scales_by_height() {
        assert!(approx_eq(fit_scale(1920.0, 540.0, 1920.0, 1080.0), 0.5));
    }

    #[test]
    fn exact_fit_is_unity() {
        assert!(approx_eq(fit_scale(1920.0, 1080.0, 1920.0, 1080.0), 1.0));
    }

    #[test]
    fn larger_container_scales_up() {
        assert!(approx_eq(fit_scale(3840.0, 2160.0, 1920.0, 1080.0), 2.0));
    }

    #[test]
    fn degenerate_content_yields_zero() {
        assert!(approx_eq(fit_scale(1920.0, 1080.0, 0.0, 1080.0), 0.0));
        assert!(approx_eq(fit_scale(1920.0, 1080.0, 1920.0, -1.0), 0.0));
    }
}
