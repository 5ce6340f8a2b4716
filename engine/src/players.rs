pub trait Players {
    /// Number of players. Players are addressed as `1..=player_count()`.
    fn player_count(&self) -> usize;

    fn players(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.player_count()
    }
}
