/// Per player utilities of a finished game. Each value lies in [-1, 1].
pub trait Value: Clone {
    fn get_value_for_player(&self, player: usize) -> f32;
}
