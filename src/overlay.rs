//! Overlays of match data onto a rendered pitch.

use crate::error::ColumnNotFound;
use crate::events::EventLog;
use crate::surface::{Colour, MarkerStyle, Shape, Stroke, Surface};
use crate::tracking::TrackingData;

/// Trace colours, picked by jersey number modulo the palette size.
pub const TRACE_COLOURS: [Colour; 11] = [
    Colour("red"),
    Colour("green"),
    Colour("blue"),
    Colour("black"),
    Colour("#00bfbf"),
    Colour("#bf00bf"),
    Colour("#bfbf00"),
    Colour("coral"),
    Colour("cyan"),
    Colour("palegreen"),
    Colour("hotpink"),
];

const GOAL_MARKER_SIZE: f64 = 6.0;
const GOAL_ARROW_OPACITY: f64 = 0.1;
const GOAL_ARROW_WIDTH: f64 = 1.0;
const TRACE_MARKER_SIZE: f64 = 1.0;
const SNAPSHOT_MARKER_SIZE: f64 = 10.0;
const BALL_MARKER_SIZE: f64 = 6.0;

pub fn trace_colour(number: u8) -> Colour {
    TRACE_COLOURS[number as usize % TRACE_COLOURS.len()]
}

/// Marks where each goal was shot from, with a faint arrow to where the ball ended up. Goals
/// without a recorded start position are skipped; those without an end get no arrow.
pub fn plot_goals(surface: &mut Surface, goals: &EventLog) {
    let starts = goals.iter().filter_map(|goal| goal.start);
    surface.markers(starts, MarkerStyle::new(Shape::Circle, Colour::RED, GOAL_MARKER_SIZE));
    let stroke = Stroke {
        colour: Colour::RED,
        width: GOAL_ARROW_WIDTH,
        opacity: GOAL_ARROW_OPACITY,
    };
    for goal in goals {
        if let (Some(start), Some(end)) = (goal.start, goal.end) {
            surface.arrow(start, end, stroke);
        }
    }
}

/// Plots the first `frames` positions of every tracked player as small dots.
pub fn plot_traces(surface: &mut Surface, tracking: &TrackingData, frames: usize) -> Result<(), ColumnNotFound> {
    for &number in tracking.players() {
        let trace = tracking.trace(number, frames)?;
        surface.markers(
            trace.into_iter().flatten(),
            MarkerStyle::new(Shape::Circle, trace_colour(number), TRACE_MARKER_SIZE),
        );
    }
    Ok(())
}

/// Plots every player's position at `frame_index`, plus the ball if it is in play.
pub fn plot_snapshot(surface: &mut Surface, tracking: &TrackingData, frame_index: usize) {
    for (number, position) in tracking.snapshot(frame_index) {
        surface.markers(
            [position],
            MarkerStyle::new(Shape::Circle, trace_colour(number), SNAPSHOT_MARKER_SIZE),
        );
    }
    let ball = tracking
        .ball_trace(frame_index + 1)
        .ok()
        .and_then(|trace| trace.get(frame_index).copied().flatten());
    if let Some(ball) = ball {
        surface.markers(
            [ball],
            MarkerStyle::new(Shape::Circle, Colour("black"), BALL_MARKER_SIZE),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldDimen, PitchConfig};
    use crate::coords::Point;
    use crate::domain::Side;
    use crate::events::tests::sample_log;
    use crate::pitch;
    use crate::surface::Primitive;
    use crate::testing::assert_points_near;

    const TRACKING: &str = "\
,,,Away,,Away,
,,,25,,15,
Period,Frame,Time [s],Player25,,Player15,,Ball,
1,1,0.04,0.5,0.5,NaN,NaN,0.5,0.5
1,2,0.08,0.75,0.5,0.25,0.25,NaN,NaN
1,3,0.12,1.0,0.5,0.25,0.25,0.6,0.5
";

    fn tracking() -> TrackingData {
        let mut tracking = TrackingData::read(TRACKING.as_bytes()).unwrap();
        tracking.to_metric(&FieldDimen::default()).unwrap();
        tracking
    }

    fn overlays(surface: &Surface) -> &[Primitive] {
        &surface.primitives()[pitch::draw(&PitchConfig::default()).primitives().len()..]
    }

    #[test]
    fn trace_colour_cycle() {
        assert_eq!(Colour("red"), trace_colour(0));
        assert_eq!(Colour("green"), trace_colour(1));
        assert_eq!(Colour("hotpink"), trace_colour(10));
        assert_eq!(Colour("red"), trace_colour(11));
        assert_eq!(Colour("#bfbf00"), trace_colour(17));
        assert_eq!(Colour("coral"), trace_colour(18));
    }

    #[test]
    fn goals_plotted_with_arrows() {
        let goals = sample_log().for_team(Side::Home).goals();
        let mut surface = pitch::draw(&PitchConfig::default());
        plot_goals(&mut surface, &goals);
        let overlays = overlays(&surface);
        assert_eq!(2, overlays.len());
        match &overlays[0] {
            Primitive::Markers { points, style } => {
                assert_eq!(Colour::RED, style.colour);
                assert_points_near(&[Point::new(47.7, 0.0)], points, 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
        match &overlays[1] {
            Primitive::Arrow { from, to, stroke } => {
                assert_points_near(&[Point::new(47.7, 0.0), Point::new(53.0, 0.0)], &[*from, *to], 1e-9);
                assert_eq!(0.1, stroke.opacity);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn no_goals_no_overlay() {
        let mut surface = pitch::draw(&PitchConfig::default());
        plot_goals(&mut surface, &EventLog::default());
        assert!(overlays(&surface).is_empty());
    }

    #[test]
    fn traces_skip_missing_frames() {
        let tracking = tracking();
        let mut surface = pitch::draw(&PitchConfig::default());
        plot_traces(&mut surface, &tracking, 2).unwrap();
        let overlays = overlays(&surface);
        assert_eq!(2, overlays.len());
        match &overlays[0] {
            Primitive::Markers { points, style } => {
                assert_eq!(trace_colour(25), style.colour);
                assert_points_near(&[Point::new(0.0, 0.0), Point::new(26.5, 0.0)], points, 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
        match &overlays[1] {
            Primitive::Markers { points, .. } => {
                assert_points_near(&[Point::new(-26.5, -17.0)], points, 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn snapshot_with_and_without_ball() {
        let tracking = tracking();

        let mut surface = pitch::draw(&PitchConfig::default());
        plot_snapshot(&mut surface, &tracking, 1);
        assert_eq!(2, overlays(&surface).len());

        let mut surface = pitch::draw(&PitchConfig::default());
        plot_snapshot(&mut surface, &tracking, 2);
        let overlays = overlays(&surface);
        assert_eq!(3, overlays.len());
        match &overlays[2] {
            Primitive::Markers { points, style } => {
                assert_eq!(Colour("black"), style.colour);
                assert_points_near(&[Point::new(10.6, 0.0)], points, 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
