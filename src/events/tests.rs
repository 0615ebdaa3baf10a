use super::*;
use crate::error::ColumnNotFound;
use assert_float_eq::*;

pub(crate) const SAMPLE: &str = "\
Team,Type,Subtype,Period,Start Frame,Start Time [s],End Frame,End Time [s],From,To,Start X,Start Y,End X,End Y
Away,SET PIECE,KICK OFF,1,1,0.04,0,0,Player19,,NaN,NaN,NaN,NaN
Away,PASS,,1,1,0.04,3,0.12,Player19,Player21,0.45,0.39,0.55,0.43
Away,PASS,,1,3,0.12,17,0.68,Player21,Player15,0.55,0.43,0.58,0.21
Away,SHOT,ON TARGET-GOAL,1,1001,40.04,1020,40.8,Player24,,0.1,0.52,0.0,0.5
Home,RECOVERY,INTERCEPTION,1,2000,80,2000,80,Player2,,0.35,0.6,NaN,NaN
Home,SHOT,OFF TARGET-OUT,1,2500,100,2510,100.4,Player10,,0.9,0.45,1.0,0.4
Home,SHOT,HEAD-ON TARGET-GOAL,2,90000,3600,90012,3600.48,Player9,,0.95,0.5,1.0,0.5
Home,SHOT,ON TARGET-SAVED,2,91000,3640,91010,3640.4,Player9,,0.88,0.55,0.97,0.5
";

pub(crate) fn sample_log() -> EventLog {
    let mut table = crate::csv::read_table(SAMPLE.as_bytes()).unwrap();
    coords::to_metric(&mut table, &schema(), &FieldDimen::default()).unwrap();
    EventLog::try_from(&table).unwrap()
}

#[test]
fn read_events() {
    let log = sample_log();
    assert_eq!(8, log.len());

    let kick_off = log.iter().next().unwrap();
    assert_eq!(Side::Away, kick_off.team);
    assert_eq!(EventType::SetPiece, kick_off.event_type);
    assert_eq!(Some("KICK OFF".into()), kick_off.subtype);
    assert_eq!(1, kick_off.period);
    assert_eq!(Some("Player19".into()), kick_off.from);
    assert_eq!(None, kick_off.to);
    assert_eq!(None, kick_off.start);
    assert_eq!(None, kick_off.end);

    let pass = log.iter().nth(1).unwrap();
    assert_eq!(None, pass.subtype);
    assert_eq!(3, pass.end_frame);
    assert_eq!(0.12, pass.end_time);
    let start = pass.start.unwrap();
    assert_float_absolute_eq!((0.45 - 0.5) * 106.0, start.x, 1e-9);
    assert_float_absolute_eq!((0.39 - 0.5) * 68.0, start.y, 1e-9);
}

#[test]
fn partially_missing_position_is_none() {
    let log = sample_log();
    let recovery = log.of_type(&EventType::Recovery);
    let recovery = recovery.iter().next().unwrap();
    assert!(recovery.start.is_some());
    assert_eq!(None, recovery.end);
}

#[test]
fn filter_by_team_and_type() {
    let log = sample_log();
    assert_eq!(4, log.for_team(Side::Away).len());
    assert_eq!(4, log.for_team(Side::Home).len());
    assert_eq!(3, log.for_team(Side::Home).of_type(&EventType::Shot).len());
    assert_eq!(0, log.for_team(Side::Away).of_type(&EventType::Card).len());
}

#[test]
fn goals() {
    let log = sample_log();
    let goals = log.goals();
    assert_eq!(2, goals.len());
    assert!(goals.iter().all(Event::is_goal));

    let home_goals = log.for_team(Side::Home).goals();
    assert_eq!(1, home_goals.len());
    let goal = home_goals.iter().next().unwrap();
    assert_eq!(Some("HEAD-ON TARGET-GOAL".into()), goal.subtype);
    assert_eq!(Point::new(53.0, 0.0), goal.end.unwrap());
}

#[test]
fn type_counts_ordered() {
    let log = sample_log();
    assert_eq!(
        vec![
            (EventType::Shot, 4),
            (EventType::Pass, 2),
            (EventType::SetPiece, 1),
            (EventType::Recovery, 1),
        ],
        log.type_counts()
    );
}

#[test]
fn subtype_counts_skip_missing() {
    let log = sample_log();
    let counts = log.for_team(Side::Away).subtype_counts();
    assert_eq!(
        vec![("KICK OFF".to_string(), 1), ("ON TARGET-GOAL".to_string(), 1)],
        counts
    );
}

#[test]
fn value_counts_tie_break_by_key() {
    assert_eq!(
        vec![("b", 3), ("a", 1), ("c", 1)],
        value_counts(["c", "b", "a", "b", "b"])
    );
    assert!(value_counts(Vec::<u8>::new()).is_empty());
}

#[test]
fn missing_column_fatal() {
    let table = crate::csv::read_table("Team,Type\nHome,PASS\n".as_bytes()).unwrap();
    let err = EventLog::try_from(&table).unwrap_err();
    assert!(matches!(err, DataError::ColumnNotFound(ColumnNotFound(ref column)) if column == SUBTYPE));
}

#[test]
fn invalid_team_rejected() {
    let sample = SAMPLE.replacen("Away,PASS", "Neutral,PASS", 1);
    let table = crate::csv::read_table(sample.as_bytes()).unwrap();
    let err = EventLog::try_from(&table).unwrap_err();
    assert_eq!(
        "row 1, column 'Team': expected a team side, got 'Neutral'",
        err.to_string()
    );
}
