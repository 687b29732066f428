use crate::direction::Direction;

#[test]
fn parse_and_display() {
    for direction in [Direction::Deserialize, Direction::Normalize, Direction::Serialize] {
        assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
    }
    assert_eq!(Direction::default(), Direction::Normalize);
    assert!("Normalize".parse::<Direction>().is_err());
}
