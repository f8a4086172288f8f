// SPDX-License-Identifier: MPL-2.0
pub mod neural_network;

pub use neural_network::NeuralNetwork;
