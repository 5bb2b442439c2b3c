use maud::{DOCTYPE, Markup, html};

use crate::{
    catalog::Candidate,
    entities::movie,
    models::{EditErrors, EditForm},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked by rating, best first." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/select" { "Add movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add a movie to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies.iter().rev() {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie_id: i32, title: &str, form: &EditForm, errors: &EditErrors) -> String {
    page(
        "Edit movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Edit " (title) }

                        form class="mt-6 space-y-6" method="post" action=(format!("/edit/{movie_id}")) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Rating (out of 10)" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=(form.rating);
                                @if let Some(message) = errors.rating {
                                    p class="mt-2 text-sm text-red-600" { (message) }
                                }
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=(form.review);
                                @if let Some(message) = errors.review {
                                    p class="mt-2 text-sm text-red-600" { (message) }
                                }
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

pub fn select_page(candidates: &[Candidate], image_base: &str) -> String {
    page(
        "Pick a movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Pick a movie" }
                    p class="mt-2 text-gray-600" { "Choose one to add to your list." }

                    @if candidates.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "The catalog came back empty." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for candidate in candidates {
                                (candidate_card(candidate, image_base))
                            }
                        }
                    }

                    a class="mt-8 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back" }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="h-36 w-24 rounded object-cover bg-gray-200" src=(movie.img_url) alt=(movie.title);

            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        span class="text-gray-400" { "#" (movie.ranking) " " }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    span class="text-lg font-semibold text-gray-900" { (format!("{:.1}", movie.rating)) " / 10" }
                }

                p class="mt-2 text-sm text-gray-600" { (movie.description) }
                p class="mt-2 text-sm italic text-gray-500" { (movie.review) }

                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Edit" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

fn candidate_card(candidate: &Candidate, image_base: &str) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            @if let Some(poster) = &candidate.poster_path {
                img class="h-36 w-24 rounded object-cover bg-gray-200" src=(format!("{image_base}{poster}")) alt=(candidate.title);
            }

            div class="flex-1" {
                h2 class="text-xl font-semibold text-gray-900" {
                    (candidate.title)
                    @if !candidate.release_date.is_empty() {
                        span class="ml-2 font-normal text-gray-500" { "(" (candidate.release_date) ")" }
                    }
                }
                p class="mt-2 text-sm text-gray-600" { (candidate.overview) }
                a class="mt-4 inline-block text-sm text-blue-600 hover:text-blue-800" href=(format!("/add/{}", candidate.id)) { "Add" }
            }
        }
    }
}
