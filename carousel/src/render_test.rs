use super::*;

fn value<'a>(styles: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    styles.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
}

#[test]
fn ring_pose_is_centered_on_anchor() {
    let pose = ItemPose {
        index: 3,
        anchor: Anchor::Center { x: 250.0, y: 40.5 },
        scale: 1.0,
        tilt_deg: -20.0,
        z_index: 0,
        highlighted: false,
    };
    let styles = item_style(&pose);
    assert_eq!(value(&styles, "left"), Some("250.00px"));
    assert_eq!(value(&styles, "top"), Some("40.50px"));
    assert_eq!(value(&styles, "transform"), Some("translate(-50%, -50%) rotate(-20.00deg) scale(1.0000)"));
    assert_eq!(value(&styles, "z-index"), Some("0"));
}

#[test]
fn depth_pose_uses_percent_left_and_no_top() {
    let pose = ItemPose {
        index: 0,
        anchor: Anchor::LeftPercent { percent: 12.5 },
        scale: 0.8,
        tilt_deg: -6.0,
        z_index: -1,
        highlighted: false,
    };
    let styles = item_style(&pose);
    assert_eq!(value(&styles, "left"), Some("12.500%"));
    assert_eq!(value(&styles, "top"), None);
    assert_eq!(value(&styles, "transform"), Some("rotate(-6.00deg) scale(0.8000)"));
    assert_eq!(value(&styles, "z-index"), Some("-1"));
}

#[test]
fn px_rounds_to_two_places() {
    assert_eq!(px(12.345_6), "12.35px");
}
