use bag_of_words::constants::DEMO_DOCUMENTS;
use bag_of_words::{format_enumerated_list, CountVectorizer};

fn main() {
    env_logger::init();

    println!("Dataset (Documents):");
    println!("{}", format_enumerated_list(DEMO_DOCUMENTS));
    println!("{}", "-".repeat(30));

    let mut count_vectorizer = CountVectorizer::default();
    let count_matrix = count_vectorizer.fit_transform(DEMO_DOCUMENTS);

    println!("\nBag of Words Representation:");
    println!("{}", count_matrix);

    println!("\nVocabulary Mapping:");
    println!("{}", count_vectorizer.vocabulary());
}
