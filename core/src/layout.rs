#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMetrics {
    pub offset_left: f64,
    pub width: f64,
}

pub fn slide_position(container_width: f64, slide: SlideMetrics) -> f64 {
    let margin = (container_width - slide.width) / 2.0;
    -(slide.offset_left - margin)
}

pub fn slide_positions(container_width: f64, slides: &[SlideMetrics]) -> Vec<f64> {
    slides
        .iter()
        .map(|slide| slide_position(container_width, *slide))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_slide_narrower_than_container() {
        let slide = SlideMetrics {
            offset_left: 400.0,
            width: 200.0,
        };
        assert_eq!(slide_position(600.0, slide), -200.0);
    }

    #[test]
    fn first_slide_wider_than_container_shifts_left() {
        let slide = SlideMetrics {
            offset_left: 0.0,
            width: 800.0,
        };
        assert_eq!(slide_position(600.0, slide), -100.0);
    }

    #[test]
    fn positions_follow_slide_order() {
        let slides: Vec<_> = (0..3)
            .map(|i| SlideMetrics {
                offset_left: i as f64 * 100.0,
                width: 100.0,
            })
            .collect();
        assert_eq!(slide_positions(300.0, &slides), vec![100.0, 0.0, -100.0]);
    }
}
