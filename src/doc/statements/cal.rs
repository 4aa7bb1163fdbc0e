/*!
# `cal`

## Purpose
Runs the robot's sensor calibration routine.

*/
