pub mod d400_outstanding;
