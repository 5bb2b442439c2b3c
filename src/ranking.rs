use crate::entities::movie;

/// Assigns display ranks to movies already ordered by ascending rating: the
/// highest-rated movie gets rank 1, the lowest gets rank = count.
pub fn assign(movies: &mut [movie::Model]) {
    let count = movies.len();
    for (position, movie) in movies.iter_mut().enumerate() {
        movie.ranking = (count - position) as i32;
    }
}
