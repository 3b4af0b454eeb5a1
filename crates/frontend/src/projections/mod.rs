pub mod p900_best_sellers;
